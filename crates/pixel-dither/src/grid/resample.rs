//! Nearest-neighbour and supersampled resampling into a square grid.

use super::grid::{Grid, GridSize, Rgba, SourceImage};

/// How source pixels are turned into grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sampling {
    /// One nearest-neighbour source pixel per cell.
    #[default]
    Direct,
    /// Nearest-neighbour into a 4× intermediate, then a 3×3 average per cell.
    Supersampled,
}

/// How a non-square source is fitted to the square grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CropMode {
    /// Stretch the full image, ignoring aspect ratio.
    #[default]
    Stretch,
    /// Crop the largest centered square first.
    CenterCrop,
}

/// Intermediate scale factor for [`Sampling::Supersampled`].
const SUPERSAMPLE_FACTOR: usize = 4;

/// Sub-sample offsets inside one intermediate block:
/// `floor((k + 0.5) * 4 / 3)` for k = 0, 1, 2.
const SUPERSAMPLE_OFFSETS: [usize; 3] = [0, 2, 3];

/// Source region the grid is mapped from.
#[derive(Debug, Clone, Copy)]
struct Region {
    x0: usize,
    y0: usize,
    width: usize,
    height: usize,
}

impl Region {
    fn new(source: &SourceImage, crop: CropMode) -> Self {
        let (w, h) = (source.width(), source.height());
        match crop {
            CropMode::Stretch => Self {
                x0: 0,
                y0: 0,
                width: w,
                height: h,
            },
            CropMode::CenterCrop => {
                let side = w.min(h);
                Self {
                    x0: (w - side) / 2,
                    y0: (h - side) / 2,
                    width: side,
                    height: side,
                }
            }
        }
    }
}

/// Source index for destination index `d` when `n` source pixels map onto
/// `out` destination pixels: `floor((d + 0.5) * n / out)`, clamped.
#[inline]
fn nearest_index(d: usize, n: usize, out: usize) -> usize {
    ((2 * d + 1) * n / (2 * out)).min(n - 1)
}

/// Nearest-neighbour scale of `region` into an `out × out` buffer.
fn nearest(source: &SourceImage, region: Region, out: usize) -> Vec<Rgba> {
    let xs: Vec<usize> = (0..out)
        .map(|x| region.x0 + nearest_index(x, region.width, out))
        .collect();

    let mut pixels = Vec::with_capacity(out * out);
    for y in 0..out {
        let sy = region.y0 + nearest_index(y, region.height, out);
        pixels.extend(xs.iter().map(|&sx| source.get(sx, sy)));
    }
    pixels
}

/// Resample a source image into a `size × size` grid.
///
/// # Example
///
/// ```
/// use pixel_dither::{resample_with, CropMode, GridSize, Sampling, SourceImage};
///
/// let source = SourceImage::new(1, 1, &[200, 100, 50, 255]).unwrap();
/// let grid = resample_with(&source, GridSize::new(8).unwrap(), Sampling::Direct, CropMode::Stretch);
/// assert_eq!(grid.width(), 8);
/// assert!(grid.pixels().iter().all(|&p| p == [200, 100, 50, 255]));
/// ```
pub fn resample_with(
    source: &SourceImage,
    size: GridSize,
    sampling: Sampling,
    crop: CropMode,
) -> Grid {
    let width = size.get() as usize;
    let region = Region::new(source, crop);

    let pixels = match sampling {
        Sampling::Direct => nearest(source, region, width),
        Sampling::Supersampled => supersample(source, region, width),
    };

    Grid::from_parts(width, pixels)
}

fn supersample(source: &SourceImage, region: Region, width: usize) -> Vec<Rgba> {
    let big = width * SUPERSAMPLE_FACTOR;
    let intermediate = nearest(source, region, big);

    let mut pixels = Vec::with_capacity(width * width);
    for cy in 0..width {
        for cx in 0..width {
            let mut sum = [0u32; 4];
            let mut count = 0u32;
            for dy in SUPERSAMPLE_OFFSETS {
                let y = cy * SUPERSAMPLE_FACTOR + dy;
                for dx in SUPERSAMPLE_OFFSETS {
                    let x = cx * SUPERSAMPLE_FACTOR + dx;
                    if x < big && y < big {
                        let px = intermediate[y * big + x];
                        for c in 0..4 {
                            sum[c] += px[c] as u32;
                        }
                        count += 1;
                    }
                }
            }
            pixels.push(sum.map(|s| round_half_up(s, count)));
        }
    }
    pixels
}

/// `floor(sum / count + 0.5)` in integer arithmetic.
#[inline]
fn round_half_up(sum: u32, count: u32) -> u8 {
    ((2 * sum + count) / (2 * count)) as u8
}
