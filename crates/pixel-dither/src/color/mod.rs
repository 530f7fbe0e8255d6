//! Color types and the perceptual metric used for palette matching.
//!
//! Two representations are involved:
//!
//! - [`Rgb`]: 8-bit sRGB, the storage format of grids and palettes.
//! - [`Lab`]: CIE L\*a\*b\* (D65), computed on demand for distance queries.
//!
//! # Example
//!
//! ```
//! use pixel_dither::{Lab, Rgb};
//!
//! let red: Rgb = "#ff0000".parse().unwrap();
//! let lab = Lab::from(red);
//! assert!(lab.l > 50.0 && lab.a > 70.0);
//! ```

mod lab;
mod rgb;

pub use lab::Lab;
pub use rgb::{ParseColorError, Rgb};
