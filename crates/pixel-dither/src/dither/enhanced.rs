//! Enhanced quantization: weighted LAB metric.

use crate::color::Lab;
use crate::grid::Grid;
use crate::palette::Palette;

use super::Dither;

/// Nearest color under [`Lab::weighted_distance`].
///
/// Lightness differences count double and the green-red axis four times.
/// The smoothing comes from the input side: this algorithm is fed a
/// supersampled grid (see [`Algorithm::sampling`](super::Algorithm::sampling)).
pub struct Enhanced;

impl Dither for Enhanced {
    fn dither(&self, grid: &mut Grid, palette: &Palette) {
        let width = grid.width();
        for y in 0..width {
            for x in 0..width {
                let target = Lab::from(grid.rgb(x, y));
                let (idx, _) = palette.nearest_by(target, Lab::weighted_distance);
                grid.set_rgb(x, y, palette.color(idx));
            }
        }
    }
}
