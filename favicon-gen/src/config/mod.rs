mod app_config;

pub use app_config::{
    AppConfig, DEFAULT_FONT_CANDIDATES, DEFAULT_OUTPUT_DIR, DEFAULT_SOURCE, DEFAULT_TEXT,
    DEFAULT_TEXT_COLOR, parse_hex_color,
};
