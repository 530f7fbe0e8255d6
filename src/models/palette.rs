//! Named palettes: the built-in table and the GIMP / hex-list file formats.

use pixel_dither::{Palette, PixelError, Rgb};
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Name of the palette used when none is requested.
pub const DEFAULT_PALETTE: &str = "Flying Tiger";

const BUILTIN: &[(&str, &[&str])] = &[
    (
        "Flying Tiger",
        &[
            "000000", "ffffff", "ff0000", "00ff00", "0000ff", "ffff00", "ffa500", "800080",
            "ff69b4", "00ffff",
        ],
    ),
    ("Black & White", &["000000", "ffffff"]),
    (
        "Cozy 8",
        &[
            "2e294e", "541388", "f1e9da", "ffd400", "d90368", "0081a7", "00afb9", "fed9b7",
        ],
    ),
    (
        "Retro Gaming",
        &[
            "0f0f23", "262b44", "3e4a5c", "5a6988", "738699", "8ea3b0", "a4c0c7", "c0dddd",
        ],
    ),
    (
        "Sunset Vibes",
        &[
            "2d1b69", "11296b", "0f4c75", "3282b8", "bbe1fa", "ff6b6b", "ffa726", "ffcc02",
        ],
    ),
    (
        "Forest Dreams",
        &[
            "1a3a2e", "16423c", "0f3460", "533a71", "6a994e", "a7c957", "f2e8cf", "bc4749",
        ],
    ),
];

/// A palette with a display name, colors kept as `#rrggbb` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedPalette {
    pub name: String,
    pub colors: Vec<String>,
}

impl NamedPalette {
    pub fn new(name: impl Into<String>, colors: Vec<String>) -> Self {
        Self {
            name: name.into(),
            colors,
        }
    }

    /// Resolve into a matching-ready [`Palette`].
    pub fn to_palette(&self) -> Result<Palette, PixelError> {
        Palette::from_hex(&self.colors)
    }

    /// Lowercased name with whitespace runs folded to `-`, for file names.
    pub fn slug(&self) -> String {
        slugify(&self.name)
    }
}

/// Lowercase `s` and replace each whitespace run with a single `-`.
pub fn slugify(s: &str) -> String {
    s.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// The six built-in palettes, in catalog order.
pub fn builtin_palettes() -> Vec<NamedPalette> {
    BUILTIN
        .iter()
        .map(|(name, colors)| {
            NamedPalette::new(*name, colors.iter().map(|c| format!("#{c}")).collect())
        })
        .collect()
}

fn palette_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^#\s*Palette\s+Name:\s*(.+)$").expect("valid palette name regex")
    })
}

fn header_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^Name:\s*(.+)$").expect("valid header name regex"))
}

fn hex_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9a-fA-F]{6}$").expect("valid hex line regex"))
}

/// Round and clamp a GIMP channel value into a byte.
fn channel(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Parse a GIMP `.gpl` palette.
///
/// The first line must start with `GIMP Palette`. A `Name:` header line or a
/// `# Palette Name:` comment overrides `fallback_name`; other comments and
/// rows that do not start with three numbers are ignored.
pub fn parse_gpl(content: &str, fallback_name: &str) -> Result<NamedPalette, PixelError> {
    let mut lines = content.lines();
    if !lines
        .next()
        .is_some_and(|first| first.starts_with("GIMP Palette"))
    {
        return Err(PixelError::InvalidPaletteFile(format!(
            "{fallback_name}: not a GIMP palette file"
        )));
    }

    let mut name = fallback_name.to_string();
    let mut colors = Vec::new();
    for line in lines.map(str::trim).filter(|l| !l.is_empty()) {
        if line.starts_with('#') {
            if let Some(m) = palette_name_re().captures(line).and_then(|c| c.get(1)) {
                name = m.as_str().trim().to_string();
            }
            continue;
        }
        if let Some(m) = header_name_re().captures(line).and_then(|c| c.get(1)) {
            name = m.as_str().trim().to_string();
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 3 {
            continue;
        }
        let rgb: Vec<f64> = parts[..3]
            .iter()
            .filter_map(|p| p.parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .collect();
        if let [r, g, b] = rgb[..] {
            colors.push(Rgb::new(channel(r), channel(g), channel(b)).to_hex());
        }
    }

    finish(name, colors)
}

/// Parse a newline-separated list of `rrggbb` / `#rrggbb` colors.
///
/// Lines that are not exactly six hex digits are skipped.
pub fn parse_hex_list(content: &str, fallback_name: &str) -> Result<NamedPalette, PixelError> {
    let colors = content
        .lines()
        .map(str::trim)
        .map(|l| l.strip_prefix('#').unwrap_or(l))
        .filter(|l| hex_line_re().is_match(l))
        .map(|l| format!("#{}", l.to_lowercase()))
        .collect();

    finish(fallback_name.to_string(), colors)
}

fn finish(name: String, colors: Vec<String>) -> Result<NamedPalette, PixelError> {
    if colors.is_empty() {
        return Err(PixelError::InvalidPaletteFile(format!(
            "{name}: no colors found"
        )));
    }
    Ok(NamedPalette::new(name, colors))
}
