//! Ordered selective dithering: 8×8 threshold on poorly matched cells.

use crate::color::Lab;
use crate::grid::Grid;
use crate::palette::Palette;

use super::Dither;

/// LAB distance above which a cell is dithered.
const DITHER_THRESHOLD: f64 = 25.0;

/// 8×8 ordered threshold matrix, values 0..64.
pub(crate) const ORDERED_8X8: [[u8; 8]; 8] = [
    [0, 32, 8, 40, 2, 34, 10, 42],
    [48, 16, 56, 24, 50, 18, 58, 26],
    [12, 44, 4, 36, 14, 46, 6, 38],
    [60, 28, 52, 20, 62, 30, 54, 22],
    [3, 35, 11, 43, 1, 33, 9, 41],
    [51, 19, 59, 27, 49, 17, 57, 25],
    [15, 47, 7, 39, 13, 45, 5, 37],
    [63, 31, 55, 23, 61, 29, 53, 21],
];

/// Cells within 25 LAB units of their nearest color keep it. Farther cells
/// compare their brightness against `M[y%8][x%8] / 64`: above takes the
/// nearest color, otherwise the second-nearest.
pub struct OrderedSelective;

impl Dither for OrderedSelective {
    fn dither(&self, grid: &mut Grid, palette: &Palette) {
        let width = grid.width();
        for y in 0..width {
            for x in 0..width {
                let color = grid.rgb(x, y);
                let target = Lab::from(color);
                let (nearest, distance) = palette.nearest_with_distance(target);

                let selected = if distance > DITHER_THRESHOLD {
                    let threshold = ORDERED_8X8[y % 8][x % 8] as f64 / 64.0;
                    let (first, second) = palette.two_nearest(target);
                    if color.brightness() > threshold {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    fn bw() -> Palette {
        Palette::from_hex(&["#000000", "#ffffff"]).unwrap()
    }

    #[test]
    fn test_matrix_is_a_permutation() {
        let mut seen = [false; 64];
        for row in ORDERED_8X8 {
            for v in row {
                seen[v as usize] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_mid_gray_follows_matrix() {
        // Brightness 128/255 exceeds v/64 for v <= 32
        let mut grid = Grid::filled(8, [128, 128, 128, 255]);
        OrderedSelective.dither(&mut grid, &bw());
        for y in 0..8 {
            for x in 0..8 {
                let expected = if ORDERED_8X8[y][x] <= 32 {
                    Rgb::new(255, 255, 255)
                } else {
                    Rgb::new(0, 0, 0)
                };
                assert_eq!(grid.rgb(x, y), expected, "cell ({x}, {y})");
            }
        }
        let white = grid.pixels().iter().filter(|p| p[0] == 255).count();
        assert_eq!(white, 33);
    }

    #[test]
    fn test_pattern_tiles_every_eight_cells() {
        let mut grid = Grid::filled(16, [128, 128, 128, 255]);
        OrderedSelective.dither(&mut grid, &bw());
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(grid.get(x, y), grid.get(x + 8, y + 8));
            }
        }
    }

    #[test]
    fn test_good_matches_keep_nearest() {
        let mut grid = Grid::filled(8, [20, 20, 20, 255]);
        OrderedSelective.dither(&mut grid, &bw());
        assert!(grid.pixels().iter().all(|p| p[0] == 0));
    }
}
