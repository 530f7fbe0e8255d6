//! Randomized selective dithering: hash-noise threshold on poorly matched cells.

use crate::color::Lab;
use crate::grid::Grid;
use crate::palette::Palette;

use super::noise::spatial_noise;
use super::Dither;

/// LAB distance above which a cell is dithered.
const DITHER_THRESHOLD: f64 = 30.0;

/// Fixed noise seed; output is identical run to run.
const SEED: u32 = 12345;

/// Amplitude of the noise offset applied to brightness.
const NOISE_STRENGTH: f64 = 0.3;

/// Cells within 30 LAB units of their nearest color keep it. Farther cells
/// offset their brightness by `(noise - 0.5) * 0.3` and take the nearest
/// color above 0.5, otherwise the second-nearest.
pub struct RandomizedSelective;

impl Dither for RandomizedSelective {
    fn dither(&self, grid: &mut Grid, palette: &Palette) {
        let width = grid.width();
        for y in 0..width {
            for x in 0..width {
                let color = grid.rgb(x, y);
                let target = Lab::from(color);
                let (nearest, distance) = palette.nearest_with_distance(target);

                let selected = if distance > DITHER_THRESHOLD {
                    let noise = spatial_noise(x, y, SEED);
                    let (first, second) = palette.two_nearest(target);
                    let adjusted = color.brightness() + (noise - 0.5) * NOISE_STRENGTH;
                    if adjusted > 0.5 {
                        first
                    } else {
                        second
                    }
                } else {
                    nearest
                };

                grid.set_rgb(x, y, selected);
            }
        }
    }
}
