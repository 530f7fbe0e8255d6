//! Square RGBA grid, supported grid sizes and decoded source images.

use std::fmt;

use crate::api::PixelError;
use crate::color::Rgb;

/// One RGBA sample, `[R, G, B, A]`.
pub type Rgba = [u8; 4];

/// A grid edge length from the supported set.
///
/// The logical resolution of the output. Constructing a `GridSize` is the
/// only validation point: once a run has one, it never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridSize(u32);

impl GridSize {
    /// Every supported edge length, ascending.
    pub const SUPPORTED: [u32; 12] = [8, 16, 32, 64, 80, 96, 128, 192, 256, 288, 384, 512];

    /// Default edge length.
    pub const DEFAULT: GridSize = GridSize(32);

    /// Validate an edge length.
    ///
    /// # Errors
    ///
    /// [`PixelError::InvalidGridSize`] if `size` is not in [`Self::SUPPORTED`].
    pub fn new(size: u32) -> Result<Self, PixelError> {
        if Self::SUPPORTED.contains(&size) {
            Ok(Self(size))
        } else {
            Err(PixelError::InvalidGridSize(size))
        }
    }

    /// Edge length in cells.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// All supported sizes as `GridSize` values.
    pub fn all() -> impl Iterator<Item = GridSize> {
        Self::SUPPORTED.into_iter().map(GridSize)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for GridSize {
    type Error = PixelError;

    fn try_from(size: u32) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

/// A square buffer of `width × width` RGBA samples in row-major order.
///
/// Algorithms borrow a grid mutably for the whole scan and overwrite the RGB
/// channels in place. Alpha is never touched after resampling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    pixels: Vec<Rgba>,
}

impl Grid {
    /// Wrap existing samples.
    ///
    /// Any non-zero width is accepted here; [`GridSize`] restricts only the
    /// sizes the sampler produces.
    ///
    /// # Errors
    ///
    /// [`PixelError::InvalidGridSize`] for width 0, or
    /// [`PixelError::DimensionMismatch`] if `pixels.len() != width²`
    /// (reported in bytes).
    pub fn new(width: usize, pixels: Vec<Rgba>) -> Result<Self, PixelError> {
        if width == 0 {
            return Err(PixelError::InvalidGridSize(0));
        }
        if pixels.len() != width * width {
            return Err(PixelError::DimensionMismatch {
                expected: width * width * 4,
                actual: pixels.len() * 4,
            });
        }
        Ok(Self { width, pixels })
    }

    #[inline]
    pub(crate) fn from_parts(width: usize, pixels: Vec<Rgba>) -> Self {
        debug_assert_eq!(pixels.len(), width * width);
        Self { width, pixels }
    }

    /// A grid with every sample set to `fill`.
    pub fn filled(width: usize, fill: Rgba) -> Self {
        Self {
            width,
            pixels: vec![fill; width * width],
        }
    }

    /// Edge length in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// All samples, row-major.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Sample at `(x, y)`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgba {
        self.pixels[y * self.width + x]
    }

    /// RGB part of the sample at `(x, y)`.
    #[inline]
    pub fn rgb(&self, x: usize, y: usize) -> Rgb {
        Rgb::from_rgba(self.get(x, y))
    }

    /// Overwrite the RGB channels at `(x, y)`, keeping alpha.
    #[inline]
    pub fn set_rgb(&mut self, x: usize, y: usize, color: Rgb) {
        let px = &mut self.pixels[y * self.width + x];
        px[..3].copy_from_slice(&color.to_bytes());
    }

    #[inline]
    pub(crate) fn pixel_mut(&mut self, x: usize, y: usize) -> &mut Rgba {
        &mut self.pixels[y * self.width + x]
    }

    /// Flat `[R, G, B, A, ...]` bytes, `width² × 4` long.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flatten().copied().collect()
    }
}

/// A decoded RGBA image of arbitrary dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

impl SourceImage {
    /// Build from flat RGBA bytes.
    ///
    /// # Errors
    ///
    /// - [`PixelError::ImageDecodeFailure`] if either dimension is zero
    /// - [`PixelError::DimensionMismatch`] if `rgba.len() != width * height * 4`
    pub fn new(width: usize, height: usize, rgba: &[u8]) -> Result<Self, PixelError> {
        if width == 0 || height == 0 {
            return Err(PixelError::ImageDecodeFailure(format!(
                "image has no pixels ({width}x{height})"
            )));
        }
        let expected = width * height * 4;
        if rgba.len() != expected {
            return Err(PixelError::DimensionMismatch {
                expected,
                actual: rgba.len(),
            });
        }
        let pixels = rgba
            .chunks_exact(4)
            .map(|c| [c[0], c[1], c[2], c[3]])
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Sample at `(x, y)`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgba {
        self.pixels[y * self.width + x]
    }
}
