//! Image operations for favicon output.
//!
//! Provides square cropping, Lanczos resizing, font resolution with a
//! built-in bitmap fallback, and centered text rendering onto transparent
//! canvases.

use std::path::PathBuf;

pub mod crop;
pub mod font;
pub mod resize;
pub mod sizes;
pub mod text;

// Re-exports for convenience
pub use crop::{CropRect, crop_square, square_crop_rect};
pub use font::{FaviconFont, load_font_file, resolve_font};
pub use resize::resize_square;
pub use sizes::{FAVICON_SIZES, FaviconSize};
pub use text::{TextBox, centered_origin, draw_text, measure_text, render_text_favicon};

/// Errors that can occur during favicon image operations.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("Failed to load font {}: {reason}", .path.display())]
    FontLoad { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
