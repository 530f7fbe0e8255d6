//! PNG decode into [`SourceImage`] and PNG encode of output canvases.
//!
//! Decoding normalises every PNG color type and bit depth to 8-bit RGBA.
//! Encoding writes plain RGBA8 with fast settings, then recompresses with
//! oxipng.

use crate::error::RenderError;
use base64::Engine;
use pixel_dither::{Canvas, PixelError, SourceImage};
use std::io::Cursor;

const DATA_URL_PREFIX: &str = "data:";
const BASE64_MARKER: &str = ";base64,";

fn decode_failure(e: impl std::fmt::Display) -> PixelError {
    PixelError::ImageDecodeFailure(e.to_string())
}

/// Decode either raw PNG bytes or a `data:image/png;base64,...` URL.
pub fn decode_image(bytes: &[u8]) -> Result<SourceImage, PixelError> {
    if bytes.starts_with(DATA_URL_PREFIX.as_bytes()) {
        let text = std::str::from_utf8(bytes).map_err(decode_failure)?;
        decode_data_url(text)
    } else {
        decode_png(bytes)
    }
}

/// Decode a base64 PNG data URL.
pub fn decode_data_url(url: &str) -> Result<SourceImage, PixelError> {
    let url = url.trim();
    let rest = url
        .strip_prefix(DATA_URL_PREFIX)
        .ok_or_else(|| decode_failure("not a data URL"))?;
    let (mime, payload) = rest
        .split_once(BASE64_MARKER)
        .ok_or_else(|| decode_failure("data URL is not base64 encoded"))?;
    if !mime.eq_ignore_ascii_case("image/png") {
        return Err(decode_failure(format!("unsupported image type: {mime}")));
    }

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(decode_failure)?;
    decode_png(&bytes)
}

/// Decode PNG bytes into an RGBA8 source image.
pub fn decode_png(bytes: &[u8]) -> Result<SourceImage, PixelError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info().map_err(decode_failure)?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).map_err(decode_failure)?;
    let data = &buf[..info.buffer_size()];

    let rgba: Vec<u8> = match info.color_type {
        png::ColorType::Rgba => data.to_vec(),
        png::ColorType::Rgb => data
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 255])
            .collect(),
        png::ColorType::GrayscaleAlpha => data
            .chunks_exact(2)
            .flat_map(|p| [p[0], p[0], p[0], p[1]])
            .collect(),
        png::ColorType::Grayscale => data.iter().flat_map(|&v| [v, v, v, 255]).collect(),
        png::ColorType::Indexed => {
            return Err(decode_failure("indexed PNG was not expanded"));
        }
    };

    tracing::debug!(
        width = info.width,
        height = info.height,
        color_type = ?info.color_type,
        "Decoded PNG"
    );
    SourceImage::new(info.width as usize, info.height as usize, &rgba)
}

/// Encode a canvas as an optimised RGBA8 PNG.
pub fn encode_canvas(canvas: &Canvas) -> Result<Vec<u8>, RenderError> {
    let png_bytes = encode_rgba(
        canvas.width() as u32,
        canvas.height() as u32,
        &canvas.to_rgba_bytes(),
    )?;

    // Re-compress with oxipng (zopfli + adaptive filter selection)
    let optimized = oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    )
    .unwrap_or(png_bytes);
    Ok(optimized)
}

/// Encode raw RGBA8 data as a PNG.
fn encode_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(rgba)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
