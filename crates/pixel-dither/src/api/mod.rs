//! Public API for the pixel-dither crate.
//!
//! This module provides the high-level API: the [`Pixelizer`] builder, the
//! [`quantize`] and [`resample`] pipeline functions, and the [`PixelError`]
//! unified error type. The last stage, [`composite`](crate::composite), lives
//! in the output module.

mod builder;
mod error;

pub use builder::{Pixelized, Pixelizer};
pub use error::PixelError;

use crate::dither::Algorithm;
use crate::grid::{resample_with, CropMode, Grid, GridSize, Sampling, SourceImage};
use crate::palette::Palette;

/// Quantize a copy of `grid` with the algorithm named `algorithm`.
///
/// # Errors
///
/// [`PixelError::UnknownAlgorithm`] if the name matches no algorithm.
///
/// # Example
///
/// ```
/// use pixel_dither::{quantize, Grid, Palette};
///
/// let palette = Palette::from_hex(&["#000000", "#ffffff"]).unwrap();
/// let grid = Grid::filled(2, [128, 128, 128, 255]);
/// let out = quantize(&grid, &palette, "Standard").unwrap();
/// assert!(out.pixels().iter().all(|&p| p == out.get(0, 0)));
/// assert!(quantize(&grid, &palette, "Sharpen").is_err());
/// ```
pub fn quantize(grid: &Grid, palette: &Palette, algorithm: &str) -> Result<Grid, PixelError> {
    let algorithm: Algorithm = algorithm.parse()?;
    Ok(quantize_with(grid, palette, algorithm))
}

/// Quantize a copy of `grid` with `algorithm`.
pub fn quantize_with(grid: &Grid, palette: &Palette, algorithm: Algorithm) -> Grid {
    tracing::debug!(
        %algorithm,
        width = grid.width(),
        palette_len = palette.len(),
        "quantizing grid"
    );
    let mut out = grid.clone();
    algorithm.apply(&mut out, palette);
    out
}

/// Direct (nearest-neighbour, stretched) resample into a `size × size` grid.
///
/// # Errors
///
/// [`PixelError::InvalidGridSize`] if `size` is not a supported grid size.
pub fn resample(source: &SourceImage, size: u32) -> Result<Grid, PixelError> {
    let size = GridSize::new(size)?;
    Ok(resample_with(
        source,
        size,
        Sampling::Direct,
        CropMode::Stretch,
    ))
}
