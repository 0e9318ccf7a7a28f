//! Favicon generation procedures.

pub mod circle;
pub mod text;

use std::path::{Path, PathBuf};

use favicon_engine::{EngineError, FaviconSize};
use image::DynamicImage;

pub use circle::generate_circle_logo_favicons;
pub use text::generate_text_favicons;

/// Errors that abort a generation run.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Logo file not found at {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to save {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A favicon written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub edge: u32,
}

/// Write one favicon as PNG, replacing any existing file, and report it.
fn save_favicon(
    img: &DynamicImage,
    output_dir: &Path,
    size: &FaviconSize,
) -> Result<GeneratedFile, GenerateError> {
    let path = output_dir.join(size.file_name);
    img.save_with_format(&path, image::ImageFormat::Png)
        .map_err(|source| GenerateError::Save {
            path: path.clone(),
            source,
        })?;

    println!("Generated: {} ({}x{})", path.display(), size.edge, size.edge);
    tracing::debug!(path = %path.display(), edge = size.edge, "Favicon written");

    Ok(GeneratedFile {
        path,
        edge: size.edge,
    })
}
