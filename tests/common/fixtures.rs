//! Test fixtures: synthetic PNGs and palette files.

use std::fs;
use std::path::Path;

/// Encode RGBA8 pixels produced by `f(x, y)` as a PNG.
pub fn rgba_png(width: u32, height: u32, f: impl Fn(u32, u32) -> [u8; 4]) -> Vec<u8> {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            data.extend_from_slice(&f(x, y));
        }
    }

    let mut buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(&data).unwrap();
    }
    buf
}

/// A colorful opaque diagonal gradient.
pub fn gradient_png(width: u32, height: u32) -> Vec<u8> {
    rgba_png(width, height, |x, y| {
        [
            (x * 255 / (width - 1).max(1)) as u8,
            (y * 255 / (height - 1).max(1)) as u8,
            ((x + y) * 3 % 256) as u8,
            255,
        ]
    })
}

/// A single-color opaque image.
pub fn solid_png(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    rgba_png(width, height, |_, _| [rgb[0], rgb[1], rgb[2], 255])
}

/// Write a file under `dir`, returning its path.
pub fn write_file(dir: &Path, name: &str, content: &[u8]) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

pub const DUSK_GPL: &str = "GIMP Palette\n\
# Palette Name: Dusk\n\
#\n\
 20  12  28\tnight\n\
 68  36  52\n\
133  76  48\n\
222 238 214\tpaper\n";

pub const MINT_HEX: &str = "#0b3d2e\n3e8e7e\nA8E6CF\n";
