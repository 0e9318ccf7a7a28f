//! Runtime configuration: built-in defaults with environment overrides.

use std::path::PathBuf;

use anyhow::{Context, bail};
use image::Rgba;

/// Default logo artwork for the circle-crop favicons.
pub const DEFAULT_SOURCE: &str = "src/assets/images/logo/FINAL-logo-HA4E-empowering-futures.png";

/// Default directory receiving generated favicons.
pub const DEFAULT_OUTPUT_DIR: &str = "src/assets/images";

/// Default brand string for text favicons.
pub const DEFAULT_TEXT: &str = "HA4E";

/// Brand red.
pub const DEFAULT_TEXT_COLOR: Rgba<u8> = Rgba([200, 16, 46, 255]);

/// Font files probed in order for text favicons.
pub const DEFAULT_FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/Helvetica.ttc",
    "/System/Library/Fonts/Arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
];

/// Runtime configuration shared by both generators.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub source: PathBuf,
    pub output_dir: PathBuf,
    pub text: String,
    pub text_color: Rgba<u8>,
    pub font_candidates: Vec<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.into(),
            output_dir: DEFAULT_OUTPUT_DIR.into(),
            text: DEFAULT_TEXT.into(),
            text_color: DEFAULT_TEXT_COLOR,
            font_candidates: DEFAULT_FONT_CANDIDATES.iter().map(PathBuf::from).collect(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self, anyhow::Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup (env-like).
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, anyhow::Error> {
        let g = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(v) = g("FAVICON_SOURCE") {
            config.source = v.into();
        }
        if let Some(v) = g("FAVICON_OUTPUT_DIR") {
            config.output_dir = v.into();
        }
        if let Some(v) = g("FAVICON_TEXT") {
            config.text = v;
        }
        if let Some(v) = g("FAVICON_TEXT_COLOR") {
            config.text_color =
                parse_hex_color(&v).with_context(|| format!("invalid FAVICON_TEXT_COLOR {v:?}"))?;
        }
        if let Some(v) = g("FAVICON_FONTS") {
            config.font_candidates = std::env::split_paths(&v)
                .filter(|p| !p.as_os_str().is_empty())
                .collect();
        }

        Ok(config)
    }
}

/// Parse `#RRGGBB` (leading `#` optional) into an opaque color.
pub fn parse_hex_color(s: &str) -> Result<Rgba<u8>, anyhow::Error> {
    let hex = s.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        bail!("expected #RRGGBB");
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
    Ok(Rgba([channel(0)?, channel(2)?, channel(4)?, 255]))
}
