//! Unified error type for the pixel-dither public API.
//!
//! Every fallible operation in the crate returns [`PixelError`]. None of them
//! substitutes a default on failure; recovery (falling back to a default
//! palette, showing the original image) is left to the host application.

use crate::color::ParseColorError;

/// Unified error type for the pixel-dither public API.
///
/// # Example
///
/// ```
/// use pixel_dither::{Palette, PixelError};
///
/// fn black_and_white() -> Result<Palette, PixelError> {
///     Palette::from_hex(&["#000000", "#ffffff"])
/// }
/// # black_and_white().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PixelError {
    /// A palette entry is not a 6-digit hex color
    #[error("invalid color format: {0}")]
    InvalidColorFormat(#[from] ParseColorError),

    /// The palette has no colors to match against
    #[error("palette cannot be empty")]
    EmptyPalette,

    /// The algorithm key is not one of the ten catalog names
    #[error("unknown algorithm: {0:?}")]
    UnknownAlgorithm(String),

    /// The grid size is not one of the supported sizes
    #[error("unsupported grid size: {0}")]
    InvalidGridSize(u32),

    /// A palette file could not be interpreted
    #[error("invalid palette file: {0}")]
    InvalidPaletteFile(String),

    /// The source image could not be decoded
    #[error("image decode failure: {0}")]
    ImageDecodeFailure(String),

    /// An RGBA buffer does not match its declared dimensions
    #[error("pixel buffer has {actual} bytes, expected {expected}")]
    DimensionMismatch {
        /// `width * height * 4`
        expected: usize,
        /// Length of the buffer that was supplied
        actual: usize,
    },
}
