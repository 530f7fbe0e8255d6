//! Floyd-Steinberg error diffusion.

use crate::color::Lab;
use crate::grid::Grid;
use crate::palette::Palette;

use super::kernel::{diffuse, quantization_error, FLOYD_STEINBERG};
use super::Dither;

/// Floyd-Steinberg error diffusion dithering.
///
/// Each cell takes its nearest LAB color, and the full RGB error is spread
/// to the four unscanned neighbours:
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// Weights are sixteenths; error that would land outside the grid is
/// dropped.
pub struct FloydSteinberg;

impl Dither for FloydSteinberg {
    fn dither(&self, grid: &mut Grid, palette: &Palette) {
        let width = grid.width();
        for y in 0..width {
            for x in 0..width {
                let old = grid.rgb(x, y);
                let new = palette.nearest(Lab::from(old));
                grid.set_rgb(x, y, new);
                diffuse(grid, x, y, &FLOYD_STEINBERG, quantization_error(old, new, 1.0));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    fn bw() -> Palette {
        Palette::from_hex(&["#000000", "#ffffff"]).unwrap()
    }

    #[test]
    fn test_floyd_steinberg_basic() {
        let mut grid = Grid::filled(4, [128, 128, 128, 255]);
        FloydSteinberg.dither(&mut grid, &bw());

        let black = grid.pixels().iter().filter(|p| p[0] == 0).count();
        let white = grid.pixels().iter().filter(|p| p[0] == 255).count();
        assert_eq!(black + white, 16);
        assert!(black > 0 && white > 0, "mid-grey should mix both colors");
    }

    #[test]
    fn test_floyd_steinberg_100_percent_propagation() {
        // Average output level should track the input level
        let level = 77u8;
        let mut grid = Grid::filled(16, [level, level, level, 255]);
        FloydSteinberg.dither(&mut grid, &bw());

        let white = grid.pixels().iter().filter(|p| p[0] == 255).count();
        let ratio = white as f64 / 256.0;
        let expected = level as f64 / 255.0;
        assert!(
            (ratio - expected).abs() < 0.15,
            "Expected ~{expected} white ratio, got {ratio}"
        );
    }

    #[test]
    fn test_floyd_steinberg_exact_black_and_white() {
        for v in [0u8, 255] {
            let mut grid = Grid::filled(4, [v, v, v, 255]);
            FloydSteinberg.dither(&mut grid, &bw());
            assert!(grid.pixels().iter().all(|p| p[0] == v), "{v} should be unchanged");
        }
    }

    #[test]
    fn test_floyd_steinberg_first_error_reaches_neighbours() {
        // 100 grey maps to black; 7/16 of the error lifts the right
        // neighbour to 143.75, stored as 144, which maps to white.
        let mut grid = Grid::filled(3, [100, 100, 100, 255]);
        FloydSteinberg.dither(&mut grid, &bw());
        assert_eq!(grid.rgb(0, 0), Rgb::new(0, 0, 0));
        assert_eq!(grid.rgb(1, 0), Rgb::new(255, 255, 255));

        let mut plain = Grid::filled(3, [100, 100, 100, 255]);
        crate::dither::Standard.dither(&mut plain, &bw());
        assert_eq!(plain.rgb(1, 0), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_floyd_steinberg_keeps_alpha() {
        let mut grid = Grid::filled(3, [128, 128, 128, 17]);
        FloydSteinberg.dither(&mut grid, &bw());
        assert!(grid.pixels().iter().all(|p| p[3] == 17));
    }
}
