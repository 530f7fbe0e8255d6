pub mod config;
pub mod palette;

pub use config::AppConfig;
pub use palette::{builtin_palettes, parse_gpl, parse_hex_list, NamedPalette, DEFAULT_PALETTE};
