//! Asset loading with embedded fallbacks
//!
//! This module provides a unified interface for loading assets (config, palette
//! files) with the following behavior:
//!
//! - If an env var is NOT set: use embedded assets only (no filesystem access)
//! - If an env var IS set and the path is missing: fall back to embedded assets
//! - If an env var IS set and the path has files: use filesystem with embedded fallback

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Embedded palette files
#[derive(RustEmbed)]
#[folder = "palettes/"]
#[include = "*.gpl"]
#[include = "*.hex"]
struct EmbeddedPalettes;

/// Embedded default config
#[derive(RustEmbed)]
#[folder = "."]
#[include = "config.yaml"]
struct EmbeddedConfig;

/// Asset category for selective operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    Palettes,
    Config,
}

/// Report of init (extraction) operations
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// A palette file's name and raw contents.
pub type PaletteFile = (String, Cow<'static, [u8]>);

/// Lowercased extension of a file name, if any.
pub fn file_extension(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
}

fn is_palette_file(name: &str) -> bool {
    matches!(file_extension(name).as_deref(), Some("gpl" | "hex"))
}

/// Asset loader with merge behavior and optional filesystem override
#[derive(Debug, Clone, Default)]
pub struct AssetLoader {
    /// External config file path (from CONFIG_FILE env var)
    config_file: Option<PathBuf>,
    /// External palette directory (from PALETTE_DIR env var or config)
    palette_dir: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// `config_file` should be `Some` only if CONFIG_FILE was set.
    pub fn new(config_file: Option<PathBuf>) -> Self {
        Self {
            config_file,
            palette_dir: None,
        }
    }

    /// Also read palette files from `dir`.
    pub fn with_palette_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.palette_dir = dir;
        self
    }

    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    pub fn palette_dir(&self) -> Option<&Path> {
        self.palette_dir.as_deref()
    }

    /// Read the config file
    ///
    /// If an external path is configured and exists, uses that.
    /// Otherwise falls back to embedded config.
    pub fn read_config(&self) -> io::Result<Cow<'static, [u8]>> {
        if let Some(ref path) = self.config_file {
            if path.exists() {
                tracing::trace!(path = %path.display(), "Loading config from filesystem");
                return Ok(Cow::Owned(fs::read(path)?));
            }
        }

        EmbeddedConfig::get("config.yaml")
            .map(|f| {
                tracing::trace!("Loading config from embedded assets");
                f.data
            })
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, "Embedded config.yaml not found")
            })
    }

    /// Read config as a UTF-8 string
    pub fn read_config_string(&self) -> io::Result<String> {
        let bytes = self.read_config()?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Read external palette files only, sorted by file name.
    ///
    /// Unreadable entries are skipped with a warning. A missing directory
    /// yields an empty list.
    pub fn external_palette_files(&self) -> Vec<PaletteFile> {
        let Some(ref dir) = self.palette_dir else {
            return Vec::new();
        };
        let Ok(entries) = fs::read_dir(dir) else {
            tracing::debug!(dir = %dir.display(), "Palette directory not readable");
            return Vec::new();
        };

        let mut files = Vec::new();
        for entry in entries.flatten() {
            let name = entry.file_name().to_string_lossy().to_string();
            if !is_palette_file(&name) {
                continue;
            }
            match fs::read(entry.path()) {
                Ok(data) => {
                    tracing::trace!(palette = %name, "Loading palette from filesystem");
                    files.push((name, Cow::Owned(data)));
                }
                Err(e) => tracing::warn!(palette = %name, %e, "Failed to read palette file"),
            }
        }
        files.sort_by(|a, b| a.0.cmp(&b.0));
        files
    }

    /// All palette files (merged view of embedded + external)
    ///
    /// External files override embedded files with the same name. Embedded
    /// files come first, in name order, followed by external-only files.
    pub fn palette_files(&self) -> Vec<PaletteFile> {
        let mut external = self.external_palette_files();
        let mut files = Vec::new();

        let mut embedded: Vec<String> = EmbeddedPalettes::iter().map(|s| s.to_string()).collect();
        embedded.sort();
        for name in embedded {
            if let Some(pos) = external.iter().position(|(n, _)| *n == name) {
                files.push(external.remove(pos));
            } else if let Some(data) = EmbeddedPalettes::get(&name) {
                tracing::trace!(palette = %name, "Loading palette from embedded assets");
                files.push((name, data.data));
            }
        }

        files.extend(external);
        files
    }

    /// Extract embedded assets to filesystem (init command)
    ///
    /// Uses the configured paths (or defaults if not set).
    pub fn init(&self, categories: &[AssetCategory], force: bool) -> io::Result<InitReport> {
        let mut report = InitReport::default();

        for category in categories {
            match category {
                AssetCategory::Palettes => {
                    let dir = self
                        .palette_dir
                        .clone()
                        .unwrap_or_else(|| PathBuf::from("./palettes"));
                    fs::create_dir_all(&dir)?;

                    for file in EmbeddedPalettes::iter() {
                        let path = dir.join(file.as_ref());
                        if !force && path.exists() {
                            report.skipped.push(path.display().to_string());
                            continue;
                        }
                        if let Some(data) = EmbeddedPalettes::get(&file) {
                            fs::write(&path, &*data.data)?;
                            report.written.push(path.display().to_string());
                        }
                    }
                }
                AssetCategory::Config => {
                    let path = self
                        .config_file
                        .clone()
                        .unwrap_or_else(|| PathBuf::from("./config.yaml"));

                    if !force && path.exists() {
                        report.skipped.push(path.display().to_string());
                        continue;
                    }
                    if let Some(parent) = path.parent() {
                        fs::create_dir_all(parent)?;
                    }
                    if let Some(data) = EmbeddedConfig::get("config.yaml") {
                        fs::write(&path, &*data.data)?;
                        report.written.push(path.display().to_string());
                    }
                }
            }
        }

        Ok(report)
    }

    /// List embedded assets by category (for display)
    pub fn list_embedded(category: AssetCategory) -> Vec<String> {
        match category {
            AssetCategory::Palettes => {
                let mut names: Vec<String> =
                    EmbeddedPalettes::iter().map(|s| s.to_string()).collect();
                names.sort();
                names
            }
            AssetCategory::Config => vec!["config.yaml".to_string()],
        }
    }
}
