//! Dual color dithering: brightness split between the two nearest colors.

use crate::color::Lab;
use crate::grid::Grid;
use crate::palette::Palette;

use super::kernel::{diffuse, quantization_error, FLOYD_STEINBERG};
use super::Dither;

/// Fraction of the quantization error that is diffused.
const ERROR_SCALE: f64 = 0.6;

/// Chooses between the nearest and second-nearest colors by brightness,
/// then diffuses 60% of the error with the Floyd-Steinberg kernel.
///
/// Cells brighter than 0.5 take the nearest color; darker cells take the
/// second-nearest, even when they match the nearest exactly.
pub struct DualColor;

impl Dither for DualColor {
    fn dither(&self, grid: &mut Grid, palette: &Palette) {
        let width = grid.width();
        for y in 0..width {
            for x in 0..width {
                let old = grid.rgb(x, y);
                let (nearest, second) = palette.two_nearest(Lab::from(old));
                let selected = if old.brightness() > 0.5 { nearest } else { second };

                grid.set_rgb(x, y, selected);
                diffuse(
                    grid,
                    x,
                    y,
                    &FLOYD_STEINBERG,
                    quantization_error(old, selected, ERROR_SCALE),
                );
            }
        }
    }
}
