//! Palette struct with precomputed LAB values and nearest-color queries.
//!
//! A [`Palette`] is resolved once per run: hex strings are decoded and every
//! entry is converted to LAB up front, so per-pixel queries only convert the
//! target color.

use crate::api::PixelError;
use crate::color::{Lab, Rgb};

/// An ordered, non-empty set of allowed output colors.
///
/// Duplicate entries are accepted; queries always report the first
/// occurrence of the minimum, so duplicates never change results.
///
/// `Palette` is immutable after construction and `Sync`, so one instance can
/// be shared by concurrent quantization runs.
///
/// # Example
///
/// ```
/// use pixel_dither::{Lab, Palette, Rgb};
///
/// let palette = Palette::from_hex(&["#000000", "#ffffff"]).unwrap();
/// let dark = Lab::from(Rgb::new(40, 40, 40));
/// assert_eq!(palette.nearest(dark), Rgb::new(0, 0, 0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Rgb>,
    lab: Vec<Lab>,
}

impl Palette {
    /// Create a palette from RGB colors.
    ///
    /// # Errors
    ///
    /// [`PixelError::EmptyPalette`] if `colors` is empty.
    pub fn new(colors: &[Rgb]) -> Result<Self, PixelError> {
        if colors.is_empty() {
            return Err(PixelError::EmptyPalette);
        }
        Ok(Self {
            colors: colors.to_vec(),
            lab: colors.iter().map(|&c| Lab::from(c)).collect(),
        })
    }

    /// Create a palette from hex strings (`#rrggbb` or `rrggbb`).
    ///
    /// # Errors
    ///
    /// [`PixelError::InvalidColorFormat`] for the first malformed entry, or
    /// [`PixelError::EmptyPalette`] if no strings are given.
    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> Result<Self, PixelError> {
        let rgb = colors
            .iter()
            .map(|s| s.as_ref().parse::<Rgb>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&rgb)
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// All entries in order.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Entry at `idx`.
    #[inline]
    pub fn color(&self, idx: usize) -> Rgb {
        self.colors[idx]
    }

    /// True if `color` is one of the entries.
    pub fn contains(&self, color: Rgb) -> bool {
        self.colors.contains(&color)
    }

    /// Nearest entry by plain LAB distance.
    #[inline]
    pub fn nearest(&self, target: Lab) -> Rgb {
        self.nearest_with_distance(target).0
    }

    /// Nearest entry by plain LAB distance, together with that distance.
    #[inline]
    pub fn nearest_with_distance(&self, target: Lab) -> (Rgb, f64) {
        let (idx, dist) = self.nearest_by(target, Lab::distance);
        (self.colors[idx], dist)
    }

    /// Index of the entry minimizing `metric(target, entry)`, and the minimum.
    ///
    /// Linear scan in palette order; a later entry replaces the current best
    /// only when strictly closer, so ties go to the first occurrence.
    pub fn nearest_by<F>(&self, target: Lab, metric: F) -> (usize, f64)
    where
        F: Fn(Lab, Lab) -> f64,
    {
        let mut best_idx = 0;
        let mut best_dist = f64::INFINITY;

        for (i, &entry) in self.lab.iter().enumerate() {
            let dist = metric(target, entry);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        (best_idx, best_dist)
    }

    /// Nearest and second-nearest entries by plain LAB distance.
    ///
    /// The second entry must be strictly farther than the first. When no
    /// such entry exists (single-color palette, or every other entry ties
    /// with the best) the best entry is returned twice.
    pub fn two_nearest(&self, target: Lab) -> (Rgb, Rgb) {
        let mut best: Option<(usize, f64)> = None;
        let mut second: Option<(usize, f64)> = None;

        for (i, &entry) in self.lab.iter().enumerate() {
            let dist = target.distance(entry);
            match best {
                Some((_, best_dist)) if dist >= best_dist => {
                    let closer_than_second = second.map_or(true, |(_, d)| dist < d);
                    if dist != best_dist && closer_than_second {
                        second = Some((i, dist));
                    }
                }
                _ => {
                    second = best;
                    best = Some((i, dist));
                }
            }
        }

        let best_idx = best.map_or(0, |(i, _)| i);
        let second_idx = second.map_or(best_idx, |(i, _)| i);
        (self.colors[best_idx], self.colors[second_idx])
    }
}
