//! Circle logo favicons cropped from the brand artwork.

use favicon_engine::{FAVICON_SIZES, crop_square, resize_square};
use tracing::info;

use super::{GenerateError, GeneratedFile, save_favicon};
use crate::config::AppConfig;

/// Crop the left square of the logo and write one favicon per size.
///
/// Nothing is written when the source is missing. Later failures abort the
/// run and leave earlier files in place.
pub fn generate_circle_logo_favicons(
    config: &AppConfig,
) -> Result<Vec<GeneratedFile>, GenerateError> {
    if !config.source.exists() {
        return Err(GenerateError::SourceNotFound(config.source.clone()));
    }

    // Format comes from the file contents, not the extension
    let logo = image::ImageReader::open(&config.source)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(image::ImageError::IoError)
        .and_then(|reader| reader.decode())
        .map_err(|source| GenerateError::Decode {
            path: config.source.clone(),
            source,
        })?;
    info!(
        path = %config.source.display(),
        width = logo.width(),
        height = logo.height(),
        "Loaded logo"
    );

    let circle_logo = crop_square(&logo)?;
    std::fs::create_dir_all(&config.output_dir)?;

    FAVICON_SIZES
        .iter()
        .map(|size| {
            let favicon = resize_square(&circle_logo, size.edge);
            save_favicon(&favicon, &config.output_dir, size)
        })
        .collect()
}
