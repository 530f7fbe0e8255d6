//! Final RGBA buffer.

use crate::grid::Rgba;

/// The composited output image.
///
/// Pixels outside the scaled grid are fully transparent `[0, 0, 0, 0]`.
///
/// # Example
///
/// ```
/// use pixel_dither::{composite, Grid};
///
/// let grid = Grid::filled(8, [255, 0, 0, 255]);
/// let canvas = composite(&grid, 640, false);
/// assert_eq!((canvas.width(), canvas.height()), (640, 640));
/// assert_eq!(canvas.to_rgba_bytes().len(), 640 * 640 * 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

impl Canvas {
    /// A fully transparent canvas.
    pub fn transparent(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0; 4]; width * height],
        }
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// All pixels, row-major.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Pixel at `(x, y)`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgba {
        self.pixels[y * self.width + x]
    }

    #[inline]
    pub(crate) fn set(&mut self, x: usize, y: usize, px: Rgba) {
        self.pixels[y * self.width + x] = px;
    }

    /// Flat `[R, G, B, A, ...]` bytes, ready for a PNG encoder.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flatten().copied().collect()
    }
}
