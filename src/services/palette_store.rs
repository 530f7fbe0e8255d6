//! Palette catalog: built-ins merged with palette files.

use crate::assets::{file_extension, AssetLoader, PaletteFile};
use crate::error::RenderError;
use crate::models::{builtin_palettes, parse_gpl, parse_hex_list, NamedPalette};
use pixel_dither::{Palette, PixelError};
use std::path::Path;

/// Every palette available to a run, in listing order.
///
/// Names are unique case-insensitively: a file palette whose name matches an
/// earlier entry replaces it in place.
#[derive(Debug, Clone)]
pub struct PaletteCatalog {
    palettes: Vec<NamedPalette>,
}

/// Parse one palette file, choosing the format by extension.
pub fn parse_palette_file(file_name: &str, data: &[u8]) -> Result<NamedPalette, PixelError> {
    let path = Path::new(file_name);
    let fallback = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);
    let content = std::str::from_utf8(data)
        .map_err(|e| PixelError::InvalidPaletteFile(format!("{file_name}: {e}")))?;

    match file_extension(file_name).as_deref() {
        Some("gpl") => parse_gpl(content, fallback),
        _ => parse_hex_list(content, fallback),
    }
}

impl PaletteCatalog {
    /// Built-in palettes only.
    pub fn builtin() -> Self {
        Self {
            palettes: builtin_palettes(),
        }
    }

    /// Built-ins plus every embedded and external palette file.
    pub fn load(loader: &AssetLoader) -> Self {
        let mut catalog = Self::builtin();
        let files = loader.palette_files();
        let loaded = catalog.add_files(files);
        tracing::info!(
            files = loaded,
            total = catalog.len(),
            "Loaded palette catalog"
        );
        catalog
    }

    /// Parse and add palette files; invalid ones are skipped with a warning.
    ///
    /// Returns the number of files added.
    pub fn add_files(&mut self, files: Vec<PaletteFile>) -> usize {
        let mut added = 0;
        for (name, data) in files {
            match parse_palette_file(&name, &data) {
                Ok(palette) => {
                    tracing::debug!(file = %name, palette = %palette.name, "Loaded palette file");
                    self.insert(palette);
                    added += 1;
                }
                Err(e) => tracing::warn!(file = %name, %e, "Skipping invalid palette file"),
            }
        }
        added
    }

    /// Add a palette, replacing any entry with the same name.
    pub fn insert(&mut self, palette: NamedPalette) {
        match self
            .palettes
            .iter_mut()
            .find(|p| p.name.eq_ignore_ascii_case(&palette.name))
        {
            Some(existing) => *existing = palette,
            None => self.palettes.push(palette),
        }
    }

    /// Look up a palette by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&NamedPalette> {
        let name = name.trim();
        self.palettes
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Look up a palette by name and resolve it for matching.
    pub fn resolve(&self, name: &str) -> Result<(NamedPalette, Palette), RenderError> {
        let named = self
            .get(name)
            .ok_or_else(|| RenderError::UnknownPalette(name.to_string()))?;
        let palette = named.to_palette()?;
        Ok((named.clone(), palette))
    }

    pub fn palettes(&self) -> &[NamedPalette] {
        &self.palettes
    }

    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }
}
