//! Selective dithering: diffusion only for poorly matched cells.

use crate::grid::Grid;
use crate::palette::Palette;

use super::kernel::{diffuse, quantization_error, FLOYD_STEINBERG};
use super::Dither;

/// LAB distance above which a cell diffuses its error.
const DITHER_THRESHOLD: f64 = 25.0;

/// Fraction of the quantization error that is diffused.
const ERROR_SCALE: f64 = 0.5;

/// Nearest-color quantization that diffuses half of the Floyd-Steinberg
/// error, but only from cells whose nearest color is more than 25 LAB
/// units away. Good matches are kept clean.
pub struct Selective;

impl Dither for Selective {
    fn dither(&self, grid: &mut Grid, palette: &Palette) {
        let width = grid.width();
        for y in 0..width {
            for x in 0..width {
                let old = grid.rgb(x, y);
                let (new, distance) = palette.nearest_with_distance(old.into());
                grid.set_rgb(x, y, new);
                if distance > DITHER_THRESHOLD {
                    diffuse(
                        grid,
                        x,
                        y,
                        &FLOYD_STEINBERG,
                        quantization_error(old, new, ERROR_SCALE),
                    );
                }
            }
        }
    }
}
