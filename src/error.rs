use pixel_dither::PixelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Pixel pipeline error: {0}")]
    Pixel(#[from] PixelError),

    #[error("Unknown palette: {0}")]
    UnknownPalette(String),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}
