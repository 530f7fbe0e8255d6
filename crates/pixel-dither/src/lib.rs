#![allow(clippy::module_inception, clippy::needless_range_loop)]

//! pixel-dither: palette-constrained pixel-art quantization and dithering
//!
//! Turns an arbitrary RGBA image into a small square grid whose every cell is
//! a color from a fixed palette, then scales that grid up with crisp blocks.
//!
//! # Quick Start
//!
//! The [`Pixelizer`] builder runs the whole pipeline:
//!
//! ```
//! use pixel_dither::{Algorithm, GridSize, Palette, Pixelizer, SourceImage};
//!
//! let palette = Palette::from_hex(&["#000000", "#ffffff", "#ff0000"]).unwrap();
//! let source = SourceImage::new(2, 2, &[128; 16]).unwrap();
//!
//! let result = Pixelizer::new(palette)
//!     .grid_size(GridSize::new(8).unwrap())
//!     .algorithm(Algorithm::FloydSteinberg)
//!     .pixelize(&source);
//!
//! assert_eq!(result.grid.width(), 8);
//! assert_eq!(result.preview.width(), 640);
//! assert_eq!(result.base.width(), 8);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! SourceImage (any size, RGBA)
//!     |
//!     v
//! resample      direct nearest-neighbour, or 4x supersampled for Enhanced
//!     |
//!     v
//! Grid (W x W)
//!     |
//!     v
//! Algorithm     one of ten quantizers, in place, row-major
//!     |
//!     v
//! Grid (palette colors only, alpha untouched)
//!     |
//!     v
//! composite     integer block upscale, centred on a transparent canvas
//! ```
//!
//! # Color Matching
//!
//! All palette matching happens in CIE LAB (D65). Each [`Palette`] converts
//! its entries to [`Lab`] once; a lookup converts the query color and does a
//! linear scan, ties going to the earlier entry. The grid itself is the
//! working buffer for error diffusion, so diffused values are stored as
//! clamped 8-bit channels before later pixels read them.

pub mod api;
pub mod color;
pub mod dither;
pub mod grid;
pub mod output;
pub mod palette;


pub use api::{quantize, quantize_with, resample, PixelError, Pixelized, Pixelizer};
pub use color::{Lab, ParseColorError, Rgb};
pub use dither::{
    Algorithm, Artistic, Bayer, Dither, DualColor, EdgeDither, Enhanced, FloydSteinberg, Kernel,
    OrderedSelective, RandomizedSelective, Selective, Standard, FLOYD_STEINBERG,
};
pub use grid::{resample_with, CropMode, Grid, GridSize, Rgba, Sampling, SourceImage};
pub use output::{composite, Canvas, Layout, DISPLAY_SIZE};
pub use palette::Palette;
