//! Output compositing.
//!
//! A quantized [`Grid`](crate::Grid) is blown up by an integer factor with
//! nearest-neighbour block fill and centred on a transparent square
//! [`Canvas`]. With `no_upscale` the canvas is the grid itself.

mod canvas;
mod composite;

pub use canvas::Canvas;
pub use composite::{composite, Layout, DISPLAY_SIZE};
