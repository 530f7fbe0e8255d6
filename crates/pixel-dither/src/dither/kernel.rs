//! Error diffusion kernel and the in-place diffusion step.
//!
//! Diffusion writes straight into the grid being quantized, so every
//! diffused value is stored back as an 8-bit channel: clamped to
//! `[0, 255]` and rounded to the nearest integer, ties to even. Later pixels
//! see these stored values, not the exact sums.

use crate::color::Rgb;
use crate::grid::Grid;

/// An error diffusion kernel.
///
/// Each entry is `(dx, dy, weight)`; a neighbour at that offset receives
/// `error * weight / divisor`. Offsets always point at pixels that have not
/// been scanned yet (row-major order).
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// (dx, dy, weight) entries.
    pub entries: &'static [(i32, i32, u8)],

    /// Total divisor for normalizing weights.
    pub divisor: u8,
}

impl Kernel {
    /// Sum of all weights, equal to `divisor` for a kernel that
    /// propagates the full error.
    pub fn weight_sum(&self) -> u32 {
        self.entries.iter().map(|&(_, _, w)| w as u32).sum()
    }

    /// Weight of one entry as a fraction.
    #[inline]
    pub fn factor(&self, weight: u8) -> f64 {
        weight as f64 / self.divisor as f64
    }
}

/// Floyd-Steinberg dithering kernel.
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
};

/// Per-channel error `(old - new) * scale`.
#[inline]
pub(crate) fn quantization_error(old: Rgb, new: Rgb, scale: f64) -> [f64; 3] {
    let old = old.to_bytes();
    let new = new.to_bytes();
    [0, 1, 2].map(|c| (old[c] as f64 - new[c] as f64) * scale)
}

/// Store a working value the way an 8-bit clamped buffer does.
#[inline]
pub(crate) fn store_channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0).round_ties_even() as u8
}

/// Spread `error` from `(x, y)` to the kernel's in-bounds neighbours.
pub(crate) fn diffuse(grid: &mut Grid, x: usize, y: usize, kernel: &Kernel, error: [f64; 3]) {
    let width = grid.width() as i64;

    for &(dx, dy, weight) in kernel.entries {
        let nx = x as i64 + dx as i64;
        let ny = y as i64 + dy as i64;
        if nx < 0 || nx >= width || ny < 0 || ny >= width {
            continue;
        }

        let factor = kernel.factor(weight);
        let px = grid.pixel_mut(nx as usize, ny as usize);
        for c in 0..3 {
            px[c] = store_channel(px[c] as f64 + error[c] * factor);
        }
    }
}
