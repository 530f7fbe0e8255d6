//! Assertion helpers for tests.

use pixel_dither::{Palette, Rgb, SourceImage};
use pretty_assertions::assert_eq;

/// Assert bytes are a PNG and decode them.
pub fn assert_png(bytes: &[u8]) -> SourceImage {
    assert!(
        bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
    bitcrush::rendering::decode_png(bytes).expect("PNG should decode")
}

/// Assert the image is `size × size`.
pub fn assert_square(image: &SourceImage, size: usize) {
    assert_eq!(
        (image.width(), image.height()),
        (size, size),
        "unexpected image dimensions"
    );
}

/// Assert every visible pixel is a palette color.
pub fn assert_palette_only(image: &SourceImage, palette: &Palette) {
    for y in 0..image.height() {
        for x in 0..image.width() {
            let px = image.get(x, y);
            if px[3] == 0 {
                continue;
            }
            assert!(
                palette.contains(Rgb::from_rgba(px)),
                "pixel ({x}, {y}) = {px:?} is not in the palette"
            );
        }
    }
}
