//! Pixelizer builder: the primary entry point for the crate.
//!
//! [`Pixelizer`] wraps the full pipeline (sample, quantize, composite)
//! behind a fluent builder with the usual defaults.

use crate::dither::Algorithm;
use crate::grid::{resample_with, CropMode, Grid, GridSize, SourceImage};
use crate::output::{composite, Canvas, DISPLAY_SIZE};
use crate::palette::Palette;

/// Everything one pipeline run produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pixelized {
    /// The quantized `W × W` grid.
    pub grid: Grid,
    /// The grid upscaled and centred on the display canvas.
    pub preview: Canvas,
    /// The grid at native size.
    pub base: Canvas,
}

/// High-level pixel-art builder.
///
/// # Design
///
/// - Constructor requires a [`Palette`] (no invalid states)
/// - Configuration methods consume and return `self`
/// - [`pixelize()`](Self::pixelize) takes `&self` so one builder can process
///   many images
///
/// # Example
///
/// ```
/// use pixel_dither::{Algorithm, GridSize, Palette, Pixelizer, SourceImage};
///
/// let palette = Palette::from_hex(&["#000000", "#ffffff"]).unwrap();
/// let pixelizer = Pixelizer::new(palette)
///     .grid_size(GridSize::new(16).unwrap())
///     .algorithm(Algorithm::Bayer);
///
/// let source = SourceImage::new(2, 2, &[128; 16]).unwrap();
/// let out = pixelizer.pixelize(&source);
///
/// assert_eq!(out.grid.width(), 16);
/// assert_eq!(out.base.width(), 16);
/// assert_eq!(out.preview.width(), 640);
/// ```
#[derive(Debug, Clone)]
pub struct Pixelizer {
    palette: Palette,
    grid_size: GridSize,
    algorithm: Algorithm,
    crop: CropMode,
    display_size: u32,
}

impl Pixelizer {
    /// Create a new pixelizer with the given palette.
    ///
    /// Defaults: 32×32 grid, [`Algorithm::Standard`], stretch, 640 px display.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            grid_size: GridSize::DEFAULT,
            algorithm: Algorithm::Standard,
            crop: CropMode::Stretch,
            display_size: DISPLAY_SIZE,
        }
    }

    /// Set the grid size.
    #[inline]
    pub fn grid_size(mut self, size: GridSize) -> Self {
        self.grid_size = size;
        self
    }

    /// Set the algorithm.
    #[inline]
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set how non-square sources are fitted.
    #[inline]
    pub fn crop(mut self, crop: CropMode) -> Self {
        self.crop = crop;
        self
    }

    /// Set the preview canvas size.
    #[inline]
    pub fn display_size(mut self, size: u32) -> Self {
        self.display_size = size;
        self
    }

    /// The palette this pixelizer quantizes against.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Sample, quantize and composite one image.
    ///
    /// The grid is sampled with the algorithm's own policy (supersampled for
    /// [`Algorithm::Enhanced`], direct otherwise).
    pub fn pixelize(&self, source: &SourceImage) -> Pixelized {
        tracing::debug!(
            algorithm = %self.algorithm,
            grid = %self.grid_size,
            palette_len = self.palette.len(),
            "pixelizing {}x{} source",
            source.width(),
            source.height()
        );

        let mut grid = resample_with(source, self.grid_size, self.algorithm.sampling(), self.crop);
        self.algorithm.apply(&mut grid, &self.palette);

        let preview = composite(&grid, self.display_size, false);
        let base = composite(&grid, self.display_size, true);
        Pixelized {
            grid,
            preview,
            base,
        }
    }
}
