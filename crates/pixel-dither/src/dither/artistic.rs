//! Artistic quantization: contrast boost and a smooth spatial bias.

use crate::color::Lab;
use crate::grid::Grid;
use crate::palette::Palette;

use super::Dither;

/// Contrast gain applied around mid-grey before matching.
const CONTRAST: f64 = 1.2;

/// Contrast-boosted nearest-color matching with a per-cell distance bias.
///
/// Each channel is stretched as `(v - 128) * 1.2 + 128` and clamped, without
/// rounding, before the LAB conversion. Every candidate distance is then
/// offset by `(sin(0.7x) + cos(0.5y)) * 2` for the cell at `(x, y)`.
pub struct Artistic;

#[inline]
fn boost(v: u8) -> f64 {
    ((v as f64 - 128.0) * CONTRAST + 128.0).clamp(0.0, 255.0)
}

#[inline]
fn spatial_bias(x: usize, y: usize) -> f64 {
    ((x as f64 * 0.7).sin() + (y as f64 * 0.5).cos()) * 2.0
}

impl Dither for Artistic {
    fn dither(&self, grid: &mut Grid, palette: &Palette) {
        let width = grid.width();
        for y in 0..width {
            for x in 0..width {
                let [r, g, b] = grid.rgb(x, y).to_bytes();
                let target = Lab::from_rgb(boost(r), boost(g), boost(b));
                let bias = spatial_bias(x, y);
                let (idx, _) = palette.nearest_by(target, |t, e| t.distance(e) + bias);
                grid.set_rgb(x, y, palette.color(idx));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn test_boost_clamps_without_rounding() {
        assert_eq!(boost(128), 128.0);
        assert!((boost(129) - 129.2).abs() < 1e-9);
        assert_eq!(boost(0), 0.0);
        assert_eq!(boost(255), 255.0);
        assert!((boost(100) - 94.4).abs() < 1e-9);
        assert_eq!(boost(20), 0.0);
        assert_eq!(boost(240), 255.0);
    }

    #[test]
    fn test_spatial_bias_origin() {
        // sin(0) + cos(0) = 1
        assert_eq!(spatial_bias(0, 0), 2.0);
    }

    #[test]
    fn test_contrast_pushes_mid_tones_apart() {
        // 150 is boosted to 154.4 before matching
        let palette = Palette::new(&[Rgb::new(100, 100, 100), Rgb::new(170, 170, 170)]).unwrap();
        let mut grid = Grid::filled(2, [150, 150, 150, 255]);
        Artistic.dither(&mut grid, &palette);
        assert!(grid.pixels().iter().all(|&p| Rgb::from_rgba(p) == Rgb::new(170, 170, 170)));
    }

    #[test]
    fn test_artistic_outputs_palette_colors() {
        let palette = Palette::from_hex(&["#1a3a2e", "#6a994e", "#f2e8cf", "#bc4749"]).unwrap();
        let pixels = (0..256u32)
            .map(|i| [i as u8, (i * 3 % 256) as u8, (255 - i) as u8, 200])
            .collect();
        let mut grid = Grid::new(16, pixels).unwrap();
        Artistic.dither(&mut grid, &palette);
        for &px in grid.pixels() {
            assert!(palette.contains(Rgb::from_rgba(px)));
            assert_eq!(px[3], 200);
        }
    }
}
