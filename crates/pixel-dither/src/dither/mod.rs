//! Quantization and dithering algorithms.
//!
//! Every algorithm maps each cell of a [`Grid`] to a palette color, in
//! place, scanning row-major from the top-left. Three families exist:
//!
//! - **Direct matching**: [`Standard`], [`Enhanced`] (weighted LAB metric,
//!   supersampled input) and [`Artistic`] (contrast boost plus spatial
//!   distance jitter)
//! - **Ordered / threshold**: [`Bayer`], [`OrderedSelective`] and
//!   [`RandomizedSelective`] pick between the two nearest colors using a
//!   per-position threshold
//! - **Error diffusion**: [`FloydSteinberg`], [`DualColor`], [`EdgeDither`]
//!   and [`Selective`] push quantization error into unscanned neighbours,
//!   which later cells then read back from the grid
//!
//! # Example
//!
//! ```
//! use pixel_dither::{Algorithm, Dither, FloydSteinberg, Grid, Palette};
//!
//! let palette = Palette::from_hex(&["#000000", "#ffffff"]).unwrap();
//! let mut grid = Grid::filled(8, [128, 128, 128, 255]);
//!
//! FloydSteinberg.dither(&mut grid, &palette);
//! // or, selected at run time:
//! let algorithm: Algorithm = "Floyd-Steinberg".parse().unwrap();
//! algorithm.apply(&mut grid, &palette);
//! ```

mod artistic;
mod bayer;
mod dual_color;
mod edge;
mod enhanced;
mod floyd_steinberg;
mod kernel;
mod noise;
mod ordered_selective;
mod randomized_selective;
mod selective;
mod standard;

pub use artistic::Artistic;
pub use bayer::Bayer;
pub use dual_color::DualColor;
pub use edge::EdgeDither;
pub use enhanced::Enhanced;
pub use floyd_steinberg::FloydSteinberg;
pub use kernel::{Kernel, FLOYD_STEINBERG};
pub use ordered_selective::OrderedSelective;
pub use randomized_selective::RandomizedSelective;
pub use selective::Selective;
pub use standard::Standard;

use std::fmt;
use std::str::FromStr;

use crate::api::PixelError;
use crate::grid::{Grid, Sampling};
use crate::palette::Palette;

/// A quantization/dithering algorithm.
///
/// Implementors overwrite the RGB channels of every cell with a palette
/// color and leave alpha untouched. The grid doubles as the working buffer:
/// diffusion algorithms write adjusted values ahead of the scan position.
pub trait Dither {
    /// Quantize `grid` in place against `palette`.
    fn dither(&self, grid: &mut Grid, palette: &Palette);
}

/// Algorithm selection by stable string key.
///
/// # Example
///
/// ```
/// use pixel_dither::Algorithm;
///
/// let a: Algorithm = "Selective Dithering".parse().unwrap();
/// assert_eq!(a, Algorithm::Selective);
/// assert_eq!(a.key(), "Selective Dithering");
///
/// // Kebab-case aliases are accepted too
/// assert_eq!("dual-color-dithering".parse::<Algorithm>().unwrap(), Algorithm::DualColor);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// Nearest LAB color.
    #[default]
    Standard,
    /// Weighted LAB metric on supersampled input.
    Enhanced,
    /// Contrast boost and a smooth spatial bias on the distance.
    Artistic,
    /// 4×4 Bayer threshold between the two nearest colors.
    Bayer,
    /// Classic Floyd-Steinberg error diffusion.
    FloydSteinberg,
    /// Brightness split between the two nearest colors, 60% diffusion.
    DualColor,
    /// Floyd-Steinberg diffusion only on high-contrast pixels.
    Edge,
    /// 50% diffusion only on poorly matched pixels.
    Selective,
    /// 8×8 ordered threshold only on poorly matched pixels.
    OrderedSelective,
    /// Hash-noise threshold only on poorly matched pixels.
    RandomizedSelective,
}

impl Algorithm {
    /// Every algorithm, in catalog order.
    pub const ALL: [Algorithm; 10] = [
        Algorithm::Standard,
        Algorithm::Enhanced,
        Algorithm::Artistic,
        Algorithm::Bayer,
        Algorithm::FloydSteinberg,
        Algorithm::DualColor,
        Algorithm::Edge,
        Algorithm::Selective,
        Algorithm::OrderedSelective,
        Algorithm::RandomizedSelective,
    ];

    /// Stable display key, e.g. `"Floyd-Steinberg"`.
    pub fn key(self) -> &'static str {
        match self {
            Algorithm::Standard => "Standard",
            Algorithm::Enhanced => "Enhanced",
            Algorithm::Artistic => "Artistic",
            Algorithm::Bayer => "Bayer",
            Algorithm::FloydSteinberg => "Floyd-Steinberg",
            Algorithm::DualColor => "Dual Color Dithering",
            Algorithm::Edge => "Edge Dithering",
            Algorithm::Selective => "Selective Dithering",
            Algorithm::OrderedSelective => "Ordered Selective",
            Algorithm::RandomizedSelective => "Randomized Selective",
        }
    }

    /// One-line human description.
    pub fn description(self) -> &'static str {
        match self {
            Algorithm::Standard => "Fast, direct pixel mapping with LAB color space quantization",
            Algorithm::Enhanced => {
                "Better color sampling with perceptual matching and 3×3 block averaging"
            }
            Algorithm::Artistic => {
                "Spatial dithering with contrast enhancement for organic, stylized results"
            }
            Algorithm::Bayer => {
                "Classic ordered dithering with 4×4 Bayer matrix for retro crosshatch patterns"
            }
            Algorithm::FloydSteinberg => {
                "Classic error diffusion spreading quantization error to four neighbours"
            }
            Algorithm::DualColor => {
                "Selective dithering between only the 2 closest palette colors for subtle gradients"
            }
            Algorithm::Edge => {
                "Selective dithering only near high-contrast edges for subtle texture"
            }
            Algorithm::Selective => {
                "Dither only pixels that are far from palette colors, preserving good matches"
            }
            Algorithm::OrderedSelective => {
                "Selective dithering with consistent 8×8 ordered matrix pattern for structured texture"
            }
            Algorithm::RandomizedSelective => {
                "Selective dithering with blue noise randomization for organic, natural texture"
            }
        }
    }

    /// How the source image is sampled into the grid for this algorithm.
    pub fn sampling(self) -> Sampling {
        match self {
            Algorithm::Enhanced => Sampling::Supersampled,
            _ => Sampling::Direct,
        }
    }

    /// Run this algorithm over `grid` in place.
    pub fn apply(self, grid: &mut Grid, palette: &Palette) {
        match self {
            Algorithm::Standard => Standard.dither(grid, palette),
            Algorithm::Enhanced => Enhanced.dither(grid, palette),
            Algorithm::Artistic => Artistic.dither(grid, palette),
            Algorithm::Bayer => Bayer.dither(grid, palette),
            Algorithm::FloydSteinberg => FloydSteinberg.dither(grid, palette),
            Algorithm::DualColor => DualColor.dither(grid, palette),
            Algorithm::Edge => EdgeDither.dither(grid, palette),
            Algorithm::Selective => Selective.dither(grid, palette),
            Algorithm::OrderedSelective => OrderedSelective.dither(grid, palette),
            Algorithm::RandomizedSelective => RandomizedSelective.dither(grid, palette),
        }
    }
}

/// Lowercase, with whitespace and underscores folded to single dashes.
fn normalize_key(s: &str) -> String {
    s.split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

impl FromStr for Algorithm {
    type Err = PixelError;

    /// Exact key first, then a case-insensitive kebab-case alias.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(&a) = Self::ALL.iter().find(|a| a.key() == s) {
            return Ok(a);
        }
        let wanted = normalize_key(s);
        Self::ALL
            .iter()
            .copied()
            .find(|a| normalize_key(a.key()) == wanted)
            .ok_or_else(|| PixelError::UnknownAlgorithm(s.to_string()))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
