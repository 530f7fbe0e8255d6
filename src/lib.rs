//! Bitcrush - palette-constrained pixel-art converter
//!
//! Command-line host around the `pixel-dither` engine: palette catalog,
//! configuration, PNG decode/encode and batch rendering.
//! This library exposes modules for integration testing.

pub mod assets;
pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
