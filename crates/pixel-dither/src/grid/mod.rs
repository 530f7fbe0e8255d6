//! Grid sampling
//!
//! Turns an arbitrary [`SourceImage`] into a square [`Grid`] of one of the
//! supported [`GridSize`]s. Two sampling policies exist:
//!
//! - [`Sampling::Direct`]: nearest-neighbour, one source pixel per cell
//! - [`Sampling::Supersampled`]: nearest-neighbour into a 4× intermediate,
//!   then a 3×3 average per cell (used by the Enhanced algorithm)
//!
//! Non-square sources are stretched by default; [`CropMode::CenterCrop`]
//! keeps the aspect ratio by cutting the largest centered square first.

mod grid;
mod resample;

pub use grid::{Grid, GridSize, Rgba, SourceImage};
pub use resample::{resample_with, CropMode, Sampling};
