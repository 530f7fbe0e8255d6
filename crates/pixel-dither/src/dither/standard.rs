//! Standard quantization: nearest palette color by LAB distance.

use crate::color::Lab;
use crate::grid::Grid;
use crate::palette::Palette;

use super::Dither;

/// Nearest-color quantization with no dithering.
///
/// Each cell is replaced by the palette entry with the smallest Euclidean
/// LAB distance. Cells are independent, so the result does not depend on
/// scan order and running it twice changes nothing.
pub struct Standard;

impl Dither for Standard {
    fn dither(&self, grid: &mut Grid, palette: &Palette) {
        let width = grid.width();
        for y in 0..width {
            for x in 0..width {
                let nearest = palette.nearest(Lab::from(grid.rgb(x, y)));
                grid.set_rgb(x, y, nearest);
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
    fn test_standard_mid_gray_is_uniform() {
        let mut grid = Grid::filled(2, [128, 128, 128, 255]);
        Standard.dither(&mut grid, &bw());
        let first = grid.get(0, 0);
        assert!(grid.pixels().iter().all(|&p| p == first));
        // L* of 128 grey is ~54, closer to white
        assert_eq!(grid.rgb(0, 0), Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_standard_is_idempotent() {
        let palette = Palette::from_hex(&["#2e294e", "#541388", "#f1e9da", "#ffd400"]).unwrap();
        let pixels: Vec<[u8; 4]> = (0..64u32)
            .map(|i| [(i * 4) as u8, (255 - i * 3) as u8, (i * 7 % 256) as u8, 255])
            .collect();
        let mut grid = Grid::new(8, pixels).unwrap();
        Standard.dither(&mut grid, &palette);
        let once = grid.clone();
        Standard.dither(&mut grid, &palette);
        assert_eq!(grid, once);
    }

    #[test]
    fn test_standard_keeps_alpha() {
        let mut grid = Grid::new(1, vec![[10, 10, 10, 42]]).unwrap();
        Standard.dither(&mut grid, &bw());
        assert_eq!(grid.get(0, 0), [0, 0, 0, 42]);
    }
}
