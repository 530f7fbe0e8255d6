//! Integer upscale and centring of a grid on the display canvas.

use crate::grid::Grid;

use super::Canvas;

/// Default display canvas edge length in pixels.
pub const DISPLAY_SIZE: u32 = 640;

/// Placement of a grid on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Canvas edge length.
    pub canvas_size: usize,
    /// Integer scale factor, at least 1.
    pub scale: usize,
    /// Grid edge length after scaling.
    pub scaled_size: usize,
    /// Offset of the scaled grid from the top-left corner, on both axes.
    /// Negative when the grid is larger than the canvas.
    pub offset: i64,
}

impl Layout {
    /// Compute the placement of a `grid_width` grid.
    ///
    /// With `no_upscale` the canvas is exactly the grid. Otherwise the
    /// canvas is `display_size` square, `scale = max(1, display_size / W)`
    /// and the scaled grid is centred with an integer offset.
    ///
    /// ```
    /// use pixel_dither::Layout;
    ///
    /// let l = Layout::new(100, 640, false);
    /// assert_eq!((l.scale, l.scaled_size, l.offset), (6, 600, 20));
    /// ```
    pub fn new(grid_width: usize, display_size: u32, no_upscale: bool) -> Self {
        if no_upscale {
            return Self {
                canvas_size: grid_width,
                scale: 1,
                scaled_size: grid_width,
                offset: 0,
            };
        }

        let canvas_size = display_size as usize;
        let scale = (canvas_size / grid_width.max(1)).max(1);
        let scaled_size = grid_width * scale;
        let offset = (canvas_size as i64 - scaled_size as i64) / 2;
        Self {
            canvas_size,
            scale,
            scaled_size,
            offset,
        }
    }
}

/// Upscale `grid` onto a transparent square canvas.
///
/// Each grid cell becomes a `scale × scale` block; RGB and alpha are copied
/// unchanged, so every opaque output pixel is a palette color. Blocks that
/// would fall outside the canvas are clipped.
pub fn composite(grid: &Grid, display_size: u32, no_upscale: bool) -> Canvas {
    let layout = Layout::new(grid.width(), display_size, no_upscale);
    let size = layout.canvas_size;
    let mut canvas = Canvas::transparent(size, size);

    for cy in 0..size {
        let gy = cy as i64 - layout.offset;
        if gy < 0 || gy >= layout.scaled_size as i64 {
            continue;
        }
        let row = gy as usize / layout.scale;
        for cx in 0..size {
            let gx = cx as i64 - layout.offset;
            if gx < 0 || gx >= layout.scaled_size as i64 {
                continue;
            }
            canvas.set(cx, cy, grid.get(gx as usize / layout.scale, row));
        }
    }

    canvas
}
