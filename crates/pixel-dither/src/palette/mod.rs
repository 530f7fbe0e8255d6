//! Palette resolution and nearest-color queries
//!
//! Hex strings are parsed into [`Rgb`](crate::Rgb) once, and each entry's LAB
//! value is cached so the per-pixel scan only converts the target.

mod palette;

pub use palette::Palette;
