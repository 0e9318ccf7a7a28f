//! Text-only favicons rendered from the brand string.

use favicon_engine::{FAVICON_SIZES, render_text_favicon, resolve_font};
use image::DynamicImage;
use tracing::info;

use super::{GenerateError, GeneratedFile, save_favicon};
use crate::config::AppConfig;

/// Render the brand text centered on transparent canvases, one per size.
///
/// Font problems never fail the run; the built-in bitmap font is used when
/// no candidate loads.
pub fn generate_text_favicons(config: &AppConfig) -> Result<Vec<GeneratedFile>, GenerateError> {
    let font = resolve_font(&config.font_candidates);
    info!(font = %font.source_name(), text = %config.text, "Rendering text favicons");

    std::fs::create_dir_all(&config.output_dir)?;

    FAVICON_SIZES
        .iter()
        .map(|size| {
            let img = render_text_favicon(size.edge, &config.text, config.text_color, &font);
            save_favicon(&DynamicImage::ImageRgba8(img), &config.output_dir, size)
        })
        .collect()
}
