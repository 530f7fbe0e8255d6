pub mod png_codec;

pub use png_codec::{decode_data_url, decode_image, decode_png, encode_canvas};
