//! CIE L\*a\*b\* color space (D65 reference white)
//!
//! All palette matching is done on Euclidean (or weighted Euclidean) distance
//! in this space. Values are computed on demand and never stored in grids.

use super::rgb::Rgb;

/// D65 reference white, 2° observer.
const WHITE_X: f64 = 0.95047;
const WHITE_Y: f64 = 1.0;
const WHITE_Z: f64 = 1.08883;

/// Below this the LAB transfer function switches to its linear segment.
const LAB_EPSILON: f64 = 0.008856;

/// Below this the sRGB decode switches to its linear segment.
const SRGB_LINEAR_THRESHOLD: f64 = 0.04045;

/// A color in CIE L\*a\*b\* space.
///
/// - `l`: lightness, 0 (black) to 100 (white)
/// - `a`: green (negative) to red (positive)
/// - `b`: blue (negative) to yellow (positive)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness
    pub l: f64,
    /// Green-red axis
    pub a: f64,
    /// Blue-yellow axis
    pub b: f64,
}

impl Lab {
    /// Create a LAB color from its components.
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Convert sRGB channel values in `[0, 255]` to LAB.
    ///
    /// Channels are accepted as `f64` because some algorithms match colors
    /// that were contrast-boosted without rounding. Inputs outside `[0, 255]`
    /// produce NaN through the gamma power function; callers clamp first.
    pub fn from_rgb(r: f64, g: f64, b: f64) -> Self {
        let r = srgb_to_linear(r / 255.0);
        let g = srgb_to_linear(g / 255.0);
        let b = srgb_to_linear(b / 255.0);

        let x = (r * 0.4124564 + g * 0.3575761 + b * 0.1804375) / WHITE_X;
        let y = (r * 0.2126729 + g * 0.7151522 + b * 0.072175) / WHITE_Y;
        let z = (r * 0.0193339 + g * 0.119192 + b * 0.9503041) / WHITE_Z;

        let fx = lab_f(x);
        let fy = lab_f(y);
        let fz = lab_f(z);

        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    /// Euclidean distance (CIE76 ΔE).
    ///
    /// ```
    /// use pixel_dither::{Lab, Rgb};
    ///
    /// let black = Lab::from(Rgb::new(0, 0, 0));
    /// let white = Lab::from(Rgb::new(255, 255, 255));
    /// assert!((black.distance(white) - 100.0).abs() < 0.01);
    /// ```
    #[inline]
    pub fn distance(self, other: Lab) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }

    /// Weighted distance `sqrt(2ΔL² + 4Δa² + Δb²)`.
    ///
    /// Lightness counts double and the green-red axis four times, which keeps
    /// supersampled averages from drifting toward muddy hues.
    #[inline]
    pub fn weighted_distance(self, other: Lab) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (2.0 * dl * dl + 4.0 * da * da + db * db).sqrt()
    }
}

impl From<Rgb> for Lab {
    #[inline]
    fn from(c: Rgb) -> Self {
        Lab::from_rgb(c.r as f64, c.g as f64, c.b as f64)
    }
}

/// sRGB gamma decode (IEC 61966-2-1) of a normalized channel.
#[inline]
fn srgb_to_linear(v: f64) -> f64 {
    if v > SRGB_LINEAR_THRESHOLD {
        ((v + 0.055) / 1.055).powf(2.4)
    } else {
        v / 12.92
    }
}

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_lab_close(actual: Lab, expected: (f64, f64, f64), tol: f64) {
        assert!(
            (actual.l - expected.0).abs() < tol
                && (actual.a - expected.1).abs() < tol
                && (actual.b - expected.2).abs() < tol,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn test_reference_values() {
        assert_lab_close(Lab::from(Rgb::new(0, 0, 0)), (0.0, 0.0, 0.0), 1e-9);
        assert_lab_close(Lab::from(Rgb::new(255, 255, 255)), (100.0, 0.0, 0.0), 0.01);
        assert_lab_close(Lab::from(Rgb::new(255, 0, 0)), (53.24, 80.09, 67.20), 0.05);
        assert_lab_close(Lab::from(Rgb::new(0, 0, 255)), (32.30, 79.19, -107.86), 0.05);
    }

    #[test]
    fn test_grey_has_no_chroma() {
        for v in [1u8, 17, 64, 128, 200, 254] {
            let lab = Lab::from(Rgb::new(v, v, v));
            assert!(lab.a.abs() < 0.01 && lab.b.abs() < 0.01, "{v}: {lab:?}");
        }
    }

    #[test]
    fn test_lightness_is_monotonic_in_grey() {
        let mut prev = -1.0;
        for v in 0..=255u8 {
            let l = Lab::from(Rgb::new(v, v, v)).l;
            assert!(l > prev, "L must increase at {v}");
            prev = l;
        }
    }

    #[test]
    fn test_continuous_across_piecewise_thresholds() {
        // sRGB threshold 0.04045 sits at channel value ~10.31
        let at = 0.04045 * 255.0;
        let below = Lab::from_rgb(at - 1e-6, at - 1e-6, at - 1e-6);
        let above = Lab::from_rgb(at + 1e-6, at + 1e-6, at + 1e-6);
        assert!(below.distance(above) < 1e-3, "{below:?} vs {above:?}");

        // The LAB threshold 0.008856 is hit by dark greys near Y = 0.008856
        let mut prev = Lab::from_rgb(0.0, 0.0, 0.0);
        let mut v = 0.0;
        while v <= 40.0 {
            let cur = Lab::from_rgb(v, v, v);
            assert!(cur.distance(prev) < 0.1, "jump at {v}: {prev:?} -> {cur:?}");
            prev = cur;
            v += 0.01;
        }
    }

    #[test]
    fn test_deterministic() {
        let a = Lab::from_rgb(12.5, 200.0, 99.0);
        let b = Lab::from_rgb(12.5, 200.0, 99.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_distance_is_symmetric_and_zero_on_self() {
        let p = Lab::from(Rgb::new(10, 200, 30));
        let q = Lab::from(Rgb::new(250, 20, 90));
        assert_eq!(p.distance(p), 0.0);
        assert_eq!(p.distance(q), q.distance(p));
        assert_eq!(p.weighted_distance(p), 0.0);
    }

    #[test]
    fn test_weighted_distance_weights() {
        let origin = Lab::new(0.0, 0.0, 0.0);
        assert!((origin.weighted_distance(Lab::new(1.0, 0.0, 0.0)) - 2f64.sqrt()).abs() < 1e-12);
        assert!((origin.weighted_distance(Lab::new(0.0, 1.0, 0.0)) - 2.0).abs() < 1e-12);
        assert!((origin.weighted_distance(Lab::new(0.0, 0.0, 1.0)) - 1.0).abs() < 1e-12);
    }
}
