//! Edge dithering: error diffusion only where the local contrast is high.

use crate::color::Lab;
use crate::grid::Grid;
use crate::palette::Palette;

use super::kernel::{diffuse, quantization_error, FLOYD_STEINBERG};
use super::Dither;

/// Sum of absolute RGB differences above which a neighbour marks an edge.
const EDGE_THRESHOLD: u32 = 80;

/// Nearest-color quantization that diffuses full Floyd-Steinberg error only
/// from edge cells.
///
/// A cell is an edge when any of its four direct neighbours differs from it
/// by more than 80 (sum of absolute RGB channel differences). Neighbours are
/// read from the grid as it stands during the scan, so the top and left
/// neighbours are already quantized. Cells on the outer border are never
/// edges.
pub struct EdgeDither;

pub(crate) fn is_edge(grid: &Grid, x: usize, y: usize) -> bool {
    let width = grid.width();
    if x == 0 || y == 0 || x == width - 1 || y == width - 1 {
        return false;
    }

    let current = grid.get(x, y);
    [(x, y - 1), (x, y + 1), (x - 1, y), (x + 1, y)]
        .into_iter()
        .any(|(nx, ny)| {
            let neighbour = grid.get(nx, ny);
            let diff: u32 = (0..3)
                .map(|c| (current[c] as i32 - neighbour[c] as i32).unsigned_abs())
                .sum();
            diff > EDGE_THRESHOLD
        })
}

impl Dither for EdgeDither {
    fn dither(&self, grid: &mut Grid, palette: &Palette) {
        let width = grid.width();
        for y in 0..width {
            for x in 0..width {
                let edge = is_edge(grid, x, y);
                let old = grid.rgb(x, y);
                let new = palette.nearest(Lab::from(old));
                grid.set_rgb(x, y, new);
                if edge {
                    diffuse(grid, x, y, &FLOYD_STEINBERG, quantization_error(old, new, 1.0));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn test_border_is_never_an_edge() {
        let mut grid = Grid::filled(3, [0, 0, 0, 255]);
        grid.set_rgb(1, 0, Rgb::new(255, 255, 255));
        for (x, y) in [(0, 0), (1, 0), (2, 0), (0, 1), (2, 1), (0, 2), (1, 2), (2, 2)] {
            assert!(!is_edge(&grid, x, y), "({x}, {y})");
        }
        // The interior cell sees the white top neighbour
        assert!(is_edge(&grid, 1, 1));
    }

    #[test]
    fn test_edge_threshold_is_strict() {
        let mut grid = Grid::filled(3, [100, 100, 100, 255]);
        grid.set_rgb(2, 1, Rgb::new(127, 127, 126)); // diff 80
        assert!(!is_edge(&grid, 1, 1));
        grid.set_rgb(2, 1, Rgb::new(127, 127, 127)); // diff 81
        assert!(is_edge(&grid, 1, 1));
    }

    #[test]
    fn test_palette_colored_input_is_unchanged() {
        let palette = Palette::from_hex(&["#000000", "#ffffff"]).unwrap();
        let pixels = (0..25)
            .map(|i| if i % 3 == 0 { [255, 255, 255, 255] } else { [0, 0, 0, 255] })
            .collect();
        let mut grid = Grid::new(5, pixels).unwrap();
        let before = grid.clone();
        EdgeDither.dither(&mut grid, &palette);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_edge_cell_diffuses() {
        // Interior cell (1,1) is an edge against its quantized top neighbour,
        // so its error reaches (2,1); a border-only grid of the same values
        // quantizes plainly.
        let palette = Palette::from_hex(&["#000000", "#ffffff"]).unwrap();
        let mut grid = Grid::filled(4, [100, 100, 100, 255]);
        EdgeDither.dither(&mut grid, &palette);
        // Top row is border: no diffusion, 100 maps to black everywhere
        for x in 0..4 {
            assert_eq!(grid.rgb(x, 0), Rgb::new(0, 0, 0));
        }
        // (1,1) is black with error 100; (2,1) receives 43.75 -> 144 -> white
        assert_eq!(grid.rgb(1, 1), Rgb::new(0, 0, 0));
        assert_eq!(grid.rgb(2, 1), Rgb::new(255, 255, 255));
    }
}
