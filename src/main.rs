use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bitcrush::assets::{AssetCategory, AssetLoader};
use bitcrush::models::{AppConfig, NamedPalette};
use bitcrush::rendering::decode_image;
use bitcrush::services::{PaletteCatalog, RenderJob, RenderService};
use pixel_dither::{Algorithm, CropMode, GridSize};

#[derive(Parser)]
#[command(name = "bitcrush")]
#[command(about = "Bitcrush - turn images into palette-constrained pixel art")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Pixelize an image and write preview and base PNGs
    Render {
        /// Input PNG file, or a text file holding a data:image/png;base64 URL
        #[arg(short, long)]
        input: PathBuf,

        /// Directory for the output PNGs
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Grid edge length (8, 16, 32, 64, 80, 96, 128, 192, 256, 288, 384, 512)
        #[arg(short, long)]
        grid: Option<u32>,

        /// Palette name from the catalog (see `bitcrush palettes`)
        #[arg(short, long, conflicts_with = "colors")]
        palette: Option<String>,

        /// Custom palette as comma-separated hex RGB (e.g. "#000000,#FFFFFF,#FF0000")
        #[arg(long)]
        colors: Option<String>,

        /// Algorithm key (see `bitcrush algorithms`), or "all"
        #[arg(short, long)]
        algorithm: Option<String>,

        /// Write only the native-size image, skip the upscaled preview
        #[arg(long)]
        no_upscale: bool,

        /// Crop non-square images to their centred square instead of stretching
        #[arg(long)]
        center_crop: bool,

        /// Edge length of the upscaled preview in pixels
        #[arg(long)]
        display_size: Option<u32>,
    },
    /// List the palette catalog
    Palettes {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the available algorithms
    Algorithms,
    /// Extract embedded assets to filesystem for customization
    Init {
        /// Extract palette files
        #[arg(long)]
        palettes: bool,

        /// Extract config.yaml
        #[arg(long)]
        config: bool,

        /// Extract all assets
        #[arg(long)]
        all: bool,

        /// Overwrite existing files
        #[arg(long, short)]
        force: bool,

        /// List embedded assets without extracting
        #[arg(long)]
        list: bool,
    },
}

/// Options of the render command after clap parsing.
struct RenderArgs {
    input: PathBuf,
    output_dir: PathBuf,
    grid: Option<u32>,
    palette: Option<String>,
    colors: Option<String>,
    algorithm: Option<String>,
    no_upscale: bool,
    center_crop: bool,
    display_size: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bitcrush=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Some(Commands::Render {
            input,
            output_dir,
            grid,
            palette,
            colors,
            algorithm,
            no_upscale,
            center_crop,
            display_size,
        }) => run_render_command(RenderArgs {
            input,
            output_dir,
            grid,
            palette,
            colors,
            algorithm,
            no_upscale,
            center_crop,
            display_size,
        }),
        Some(Commands::Palettes { json }) => run_palettes_command(json),
        Some(Commands::Algorithms) => {
            run_algorithms_command();
            Ok(())
        }
        Some(Commands::Init {
            palettes,
            config,
            all,
            force,
            list,
        }) => run_init_command(palettes, config, all, force, list),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Config and palette catalog, with env var overrides applied.
fn load_environment() -> (AppConfig, AssetLoader) {
    let config_file = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);
    let palette_dir = std::env::var("PALETTE_DIR").ok().map(PathBuf::from);

    let loader = AssetLoader::new(config_file);
    let config = AppConfig::load_from_assets(&loader);
    let loader = loader.with_palette_dir(config.resolve_palette_dir(palette_dir));
    (config, loader)
}

/// Parse a comma-separated color list into an anonymous palette.
fn custom_palette(colors: &str) -> NamedPalette {
    let colors = colors
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(String::from)
        .collect();
    NamedPalette::new("custom", colors)
}

/// "all" selects every algorithm; anything else must be a single key.
fn parse_algorithms(key: &str) -> anyhow::Result<Vec<Algorithm>> {
    if key.trim().eq_ignore_ascii_case("all") {
        return Ok(Algorithm::ALL.to_vec());
    }
    Ok(vec![key.parse()?])
}

/// Pixelize one image to PNG files (no server needed)
fn run_render_command(args: RenderArgs) -> anyhow::Result<()> {
    let (config, loader) = load_environment();

    let (named, palette) = match args.colors {
        Some(ref colors) => {
            let named = custom_palette(colors);
            let palette = named.to_palette()?;
            (named, palette)
        }
        None => {
            let catalog = PaletteCatalog::load(&loader);
            let name = args.palette.as_deref().unwrap_or(&config.palette);
            catalog.resolve(name)?
        }
    };

    let grid_size = GridSize::new(args.grid.unwrap_or(config.grid_size))?;
    let algorithms =
        parse_algorithms(args.algorithm.as_deref().unwrap_or(&config.algorithm))?;

    let bytes = std::fs::read(&args.input)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", args.input.display()))?;
    let source = decode_image(&bytes)?;

    let job = RenderJob {
        grid_size,
        algorithms,
        crop: if args.center_crop {
            CropMode::CenterCrop
        } else {
            CropMode::Stretch
        },
        display_size: args.display_size.unwrap_or(config.display_size),
        no_upscale: args.no_upscale,
        ..RenderJob::new(&named, palette)
    };

    let service = RenderService::new(&args.output_dir);
    let files = service.render(&source, &job)?;
    for file in &files {
        println!("Rendered {} ({} bytes)", file.path.display(), file.bytes);
    }
    tracing::info!(
        count = files.len(),
        dir = %service.output_dir().display(),
        "Render complete"
    );

    Ok(())
}

/// Print the palette catalog
fn run_palettes_command(json: bool) -> anyhow::Result<()> {
    let (config, loader) = load_environment();
    let catalog = PaletteCatalog::load(&loader);

    if json {
        println!("{}", serde_json::to_string_pretty(catalog.palettes())?);
        return Ok(());
    }

    let width = catalog
        .palettes()
        .iter()
        .map(|p| p.name.len())
        .max()
        .unwrap_or(0);
    for palette in catalog.palettes() {
        let marker = if palette.name.eq_ignore_ascii_case(&config.palette) {
            "*"
        } else {
            " "
        };
        println!(
            "{marker} {:<width$}  {:>2} colors  {}",
            palette.name,
            palette.colors.len(),
            palette.colors.join(" ")
        );
    }
    Ok(())
}

/// Print algorithm keys and descriptions
fn run_algorithms_command() {
    let width = Algorithm::ALL
        .iter()
        .map(|a| a.key().len())
        .max()
        .unwrap_or(0);
    for algorithm in Algorithm::ALL {
        println!(
            "  {:<width$}  {}",
            algorithm.key(),
            algorithm.description()
        );
    }
}

/// Extract embedded assets to filesystem
fn run_init_command(
    palettes: bool,
    config: bool,
    all: bool,
    force: bool,
    list: bool,
) -> anyhow::Result<()> {
    if list {
        println!("Embedded assets:\n");
        println!("Palettes:");
        for f in AssetLoader::list_embedded(AssetCategory::Palettes) {
            println!("  {f}");
        }
        println!("\nConfig:");
        for f in AssetLoader::list_embedded(AssetCategory::Config) {
            println!("  {f}");
        }
        return Ok(());
    }

    let mut categories = Vec::new();
    if all || palettes {
        categories.push(AssetCategory::Palettes);
    }
    if all || config {
        categories.push(AssetCategory::Config);
    }

    if categories.is_empty() {
        eprintln!("No categories specified. Use --all, --palettes, or --config");
        eprintln!("\nRun 'bitcrush init --list' to see embedded assets.");
        std::process::exit(1);
    }

    let config_file = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);
    let palette_dir = std::env::var("PALETTE_DIR").ok().map(PathBuf::from);
    let loader = AssetLoader::new(config_file).with_palette_dir(palette_dir);

    let report = loader.init(&categories, force)?;

    if !report.written.is_empty() {
        println!("Extracted {} files:", report.written.len());
        for f in &report.written {
            println!("  + {f}");
        }
    }
    if !report.skipped.is_empty() {
        println!(
            "\nSkipped {} existing files (use --force to overwrite):",
            report.skipped.len()
        );
        for f in &report.skipped {
            println!("  - {f}");
        }
    }

    if report.written.is_empty() && report.skipped.is_empty() {
        println!("No files to extract.");
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var("CONFIG_FILE").ok();
    let palette_dir_env = std::env::var("PALETTE_DIR").ok();

    println!("Bitcrush v{VERSION}");
    println!("Palette-constrained pixel-art converter\n");

    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  PALETTE_DIR = {}",
        palette_dir_env.as_deref().unwrap_or("(not set)")
    );

    let (config, loader) = load_environment();

    println!("\nSources:");
    let config_source = match loader.config_file() {
        Some(path) if path.exists() => path.display().to_string(),
        Some(_) => "embedded (file not found)".to_string(),
        None => "embedded".to_string(),
    };
    println!("  Config:   {config_source}");

    let embedded = AssetLoader::list_embedded(AssetCategory::Palettes).len();
    match loader.palette_dir() {
        Some(dir) if dir.exists() => println!(
            "  Palettes: {} ({} files, {embedded} embedded)",
            dir.display(),
            loader.external_palette_files().len()
        ),
        Some(dir) => println!(
            "  Palettes: embedded ({embedded} files, {} not found)",
            dir.display()
        ),
        None => println!("  Palettes: embedded ({embedded} files)"),
    }

    let catalog = PaletteCatalog::load(&loader);
    println!("\nDefaults:");
    println!("  Grid:      {0}x{0}", config.grid_size);
    println!(
        "  Palette:   {} ({} in catalog)",
        config.palette,
        catalog.len()
    );
    println!("  Algorithm: {}", config.algorithm);
    println!("  Display:   {} px", config.display_size);

    println!("\nCommands:");
    println!("  bitcrush render      Pixelize an image to PNG files");
    println!("  bitcrush palettes    List the palette catalog");
    println!("  bitcrush algorithms  List the available algorithms");
    println!("  bitcrush init        Extract embedded assets");
    println!("\nRun 'bitcrush --help' for more details.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_custom_palette() {
        let p = custom_palette(" #000000, #FFFFFF ,,#ff0000");
        assert_eq!(p.colors, vec!["#000000", "#FFFFFF", "#ff0000"]);
        assert_eq!(p.to_palette().unwrap().len(), 3);
    }

    #[test]
    fn test_parse_algorithms() {
        assert_eq!(parse_algorithms("ALL").unwrap().len(), 10);
        assert_eq!(
            parse_algorithms("floyd-steinberg").unwrap(),
            vec![Algorithm::FloydSteinberg]
        );
        assert!(parse_algorithms("Sharpen").is_err());
    }

    #[test]
    fn test_cli_parses_render() {
        let cli = Cli::try_parse_from([
            "bitcrush", "render", "-i", "in.png", "-g", "64", "-a", "all", "--no-upscale",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Render {
                input,
                grid,
                algorithm,
                no_upscale,
                ..
            }) => {
                assert_eq!(input, Path::new("in.png"));
                assert_eq!(grid, Some(64));
                assert_eq!(algorithm.as_deref(), Some("all"));
                assert!(no_upscale);
            }
            _ => panic!("Expected Render"),
        }
    }

    #[test]
    fn test_cli_palette_conflicts_with_colors() {
        assert!(Cli::try_parse_from([
            "bitcrush", "render", "-i", "a.png", "-p", "Cozy 8", "--colors", "#000000",
        ])
        .is_err());
    }
}
