//! Bayer ordered dithering between the two nearest colors.

use crate::color::Lab;
use crate::grid::Grid;
use crate::palette::Palette;

use super::Dither;

/// 4×4 Bayer threshold matrix, values 0..16.
pub(crate) const BAYER_4X4: [[u8; 4]; 4] = [
    [0, 8, 2, 10],
    [12, 4, 14, 6],
    [3, 11, 1, 9],
    [15, 7, 13, 5],
];

/// Ordered dithering with a 4×4 Bayer matrix.
///
/// For each cell the nearest (N) and second-nearest (S) colors are found.
/// With `t` the cell's brightness and `diff = |t - brightness(N)|`, the cell
/// takes S when `M[y%4][x%4] / 16 < diff` and `|t - brightness(S)| < 1.5 diff`,
/// otherwise N. Cells that already match exactly have `diff = 0` and never
/// switch.
pub struct Bayer;

impl Dither for Bayer {
    fn dither(&self, grid: &mut Grid, palette: &Palette) {
        let width = grid.width();
        for y in 0..width {
            for x in 0..width {
                let color = grid.rgb(x, y);
                let (nearest, second) = palette.two_nearest(Lab::from(color));

                let threshold = BAYER_4X4[y % 4][x % 4] as f64 / 16.0;
                let brightness = color.brightness();
                let diff = (brightness - nearest.brightness()).abs();
                let use_second =
                    threshold < diff && (brightness - second.brightness()).abs() < diff * 1.5;

                grid.set_rgb(x, y, if use_second { second } else { nearest });
            }
        }
    }
}
