use crate::assets::AssetLoader;
use crate::error::ConfigError;
use pixel_dither::{Algorithm, GridSize, DISPLAY_SIZE};
use serde::Deserialize;
use std::path::PathBuf;

use super::palette::DEFAULT_PALETTE;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Grid edge length (one of the supported sizes)
    pub grid_size: u32,

    /// Palette name, looked up case-insensitively in the catalog
    pub palette: String,

    /// Algorithm key, e.g. "Floyd-Steinberg"
    pub algorithm: String,

    /// Preview canvas edge length in pixels
    pub display_size: u32,

    /// Extra directory of .gpl/.hex palettes (PALETTE_DIR overrides)
    pub palette_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            grid_size: GridSize::DEFAULT.get(),
            palette: DEFAULT_PALETTE.to_string(),
            algorithm: Algorithm::default().key().to_string(),
            display_size: DISPLAY_SIZE,
            palette_dir: None,
        }
    }
}

impl AppConfig {
    /// Parse a YAML document; missing fields take their defaults.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        let result = loader
            .read_config_string()
            .map_err(ConfigError::from)
            .and_then(|content| Self::from_yaml(&content));

        match result {
            Ok(config) => {
                tracing::info!(
                    grid_size = config.grid_size,
                    palette = %config.palette,
                    algorithm = %config.algorithm,
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Palette directory, with the PALETTE_DIR value taking precedence.
    pub fn resolve_palette_dir(&self, env_override: Option<PathBuf>) -> Option<PathBuf> {
        env_override.or_else(|| self.palette_dir.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.grid_size, 32);
        assert_eq!(config.palette, "Flying Tiger");
        assert_eq!(config.algorithm, "Standard");
        assert_eq!(config.display_size, 640);
        assert_eq!(config.palette_dir, None);
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r#"
grid_size: 64
palette: Cozy 8
algorithm: Floyd-Steinberg
display_size: 512
palette_dir: ./palettes
"#;

        let config = AppConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.grid_size, 64);
        assert_eq!(config.palette, "Cozy 8");
        assert_eq!(config.algorithm, "Floyd-Steinberg");
        assert_eq!(config.display_size, 512);
        assert_eq!(config.palette_dir, Some(PathBuf::from("./palettes")));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = AppConfig::from_yaml("algorithm: Bayer\n").unwrap();

        assert_eq!(config.algorithm, "Bayer");
        assert_eq!(config.grid_size, 32);
        assert_eq!(config.palette, "Flying Tiger");
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(AppConfig::from_yaml("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        assert!(matches!(
            AppConfig::from_yaml("grid_size: [1, 2"),
            Err(ConfigError::Parse(_))
        ));
        assert!(AppConfig::from_yaml("grid_size: big").is_err());
    }

    #[test]
    fn test_palette_dir_env_override() {
        let config = AppConfig {
            palette_dir: Some(PathBuf::from("from-config")),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_palette_dir(Some(PathBuf::from("from-env"))),
            Some(PathBuf::from("from-env"))
        );
        assert_eq!(
            config.resolve_palette_dir(None),
            Some(PathBuf::from("from-config"))
        );
        assert_eq!(AppConfig::default().resolve_palette_dir(None), None);
    }

    #[test]
    fn test_load_missing_external_falls_back_to_embedded() {
        let loader = AssetLoader::new(Some(PathBuf::from("/nonexistent/bitcrush.yaml")));
        let config = AppConfig::load_from_assets(&loader);
        assert_eq!(config, AppConfig::default());
    }
}
