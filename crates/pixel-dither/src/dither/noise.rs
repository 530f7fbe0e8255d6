//! Deterministic hash noise for randomized threshold dithering.
//!
//! Not true blue noise: three integer-hash octaves at co-prime spatial
//! frequencies, blended and wrapped into `[0, 1)`. The hash mixes 32-bit
//! integer operations with `f64` arithmetic, and the exact mix is part of
//! the output, so it is reproduced bit-for-bit here.

/// Reduce a float to a wrapping signed 32-bit integer (truncate, then
/// modulo 2³²). Non-finite values map to 0.
#[inline]
fn to_int32(v: f64) -> i32 {
    if !v.is_finite() {
        return 0;
    }
    let wrapped = v.trunc().rem_euclid(4_294_967_296.0);
    wrapped as u32 as i32
}

/// Hash one lattice value into `[0, 1]`.
pub(crate) fn hash(n: f64) -> f64 {
    let i = to_int32(n);
    let mixed = (i.wrapping_shl(13) ^ i) as f64;
    let poly = n * (n * n * 15731.0 + 789_221.0) + 1_376_312_589.0;
    let masked = to_int32(mixed - poly) & 0x7fff_ffff;
    masked as f64 / 0x7fff_ffff as f64
}

/// Noise value in `[0, 1)` for grid cell `(x, y)`.
pub(crate) fn spatial_noise(x: usize, y: usize, seed: u32) -> f64 {
    let (x, y, s) = (x as f64, y as f64, seed as f64);
    let n1 = hash(x * 73.0 + y * 37.0 + s);
    let n2 = hash(x * 113.0 + y * 67.0 + s * 2.0);
    let n3 = hash(x * 151.0 + y * 97.0 + s * 3.0);
    (n1 * 0.5 + n2 * 0.3 + n3 * 0.2) % 1.0
}
