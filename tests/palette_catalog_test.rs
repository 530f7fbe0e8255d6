//! Palette catalog and configuration loading from external files.

mod common;

use bitcrush::assets::{AssetCategory, AssetLoader};
use bitcrush::models::AppConfig;
use bitcrush::services::PaletteCatalog;
use common::fixtures;
use pretty_assertions::assert_eq;
use std::path::PathBuf;

#[test]
fn test_palette_dir_is_merged_into_catalog() {
    let dir = tempfile::tempdir().unwrap();
    fixtures::write_file(dir.path(), "dusk.gpl", fixtures::DUSK_GPL.as_bytes());
    fixtures::write_file(dir.path(), "mint.hex", fixtures::MINT_HEX.as_bytes());
    fixtures::write_file(dir.path(), "notes.txt", b"ignored");
    fixtures::write_file(dir.path(), "broken.gpl", b"JASC-PAL\n0100\n");

    let loader = AssetLoader::new(None).with_palette_dir(Some(dir.path().to_path_buf()));
    let catalog = PaletteCatalog::load(&loader);

    let dusk = catalog.get("DUSK").unwrap();
    assert_eq!(
        dusk.colors,
        vec!["#140c1c", "#442434", "#854c30", "#deeed6"]
    );
    let mint = catalog.get("mint").unwrap();
    assert_eq!(mint.colors, vec!["#0b3d2e", "#3e8e7e", "#a8e6cf"]);

    assert!(catalog.get("broken").is_none());
    assert!(catalog.get("notes").is_none());

    // Built-ins first, in catalog order
    assert_eq!(catalog.palettes()[0].name, "Flying Tiger");
    assert!(catalog.get("Game Boy").is_some());
}

#[test]
fn test_external_file_overrides_embedded_file() {
    let dir = tempfile::tempdir().unwrap();
    fixtures::write_file(
        dir.path(),
        "gameboy.gpl",
        b"GIMP Palette\n# Palette Name: Game Boy\n0 0 0\n255 255 255\n",
    );

    let loader = AssetLoader::new(None).with_palette_dir(Some(dir.path().to_path_buf()));
    let files = loader.palette_files();
    let names: Vec<&str> = files.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(
        names.iter().filter(|n| **n == "gameboy.gpl").count(),
        1,
        "duplicate file in {names:?}"
    );

    let catalog = PaletteCatalog::load(&loader);
    assert_eq!(
        catalog.get("game boy").unwrap().colors,
        vec!["#000000", "#ffffff"]
    );
}

#[test]
fn test_missing_palette_dir_falls_back_to_embedded() {
    let loader =
        AssetLoader::new(None).with_palette_dir(Some(PathBuf::from("/nonexistent/palettes")));
    assert!(loader.external_palette_files().is_empty());
    assert_eq!(
        loader.palette_files().len(),
        AssetLoader::list_embedded(AssetCategory::Palettes).len()
    );
}

#[test]
fn test_external_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixtures::write_file(
        dir.path(),
        "bitcrush.yaml",
        b"grid_size: 128\npalette: Sunset Vibes\nalgorithm: Bayer\n",
    );

    let config = AppConfig::load_from_assets(&AssetLoader::new(Some(path)));
    assert_eq!(config.grid_size, 128);
    assert_eq!(config.palette, "Sunset Vibes");
    assert_eq!(config.algorithm, "Bayer");
    assert_eq!(config.display_size, 640);
}

#[test]
fn test_invalid_config_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixtures::write_file(dir.path(), "bitcrush.yaml", b"grid_size: [oops");

    let config = AppConfig::load_from_assets(&AssetLoader::new(Some(path)));
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_init_extracts_assets() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("conf").join("config.yaml");
    let palette_dir = dir.path().join("palettes");

    let loader =
        AssetLoader::new(Some(config_path.clone())).with_palette_dir(Some(palette_dir.clone()));
    let report = loader
        .init(&[AssetCategory::Palettes, AssetCategory::Config], false)
        .unwrap();

    let embedded = AssetLoader::list_embedded(AssetCategory::Palettes).len();
    assert_eq!(report.written.len(), embedded + 1);
    assert!(report.skipped.is_empty());
    assert!(config_path.exists());
    assert!(palette_dir.join("gameboy.gpl").exists());

    // Second run skips everything unless forced
    let report = loader.init(&[AssetCategory::Config], false).unwrap();
    assert_eq!(report.skipped.len(), 1);
    let report = loader.init(&[AssetCategory::Config], true).unwrap();
    assert_eq!(report.written.len(), 1);

    // Extracted files load back identically
    let catalog = PaletteCatalog::load(&loader);
    assert_eq!(catalog.get("PICO-8").unwrap().colors.len(), 16);
    assert_eq!(AppConfig::load_from_assets(&loader), AppConfig::default());
}
