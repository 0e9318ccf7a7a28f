//! Font resolution for text favicons.
//!
//! Candidates are probed in order; the first file that exists and parses as
//! a TrueType/OpenType font wins. When none do, the built-in 8x8 bitmap
//! font is used so text rendering never fails on font availability.

use std::path::{Path, PathBuf};

use ab_glyph::{Font, FontVec, PxScale};
use tracing::{debug, info};

use crate::EngineError;

/// Edge length of a built-in bitmap glyph cell in pixels.
pub const BUILTIN_CELL: u32 = 8;

/// Font used to draw favicon text.
pub enum FaviconFont {
    /// Outline font loaded from disk; scaled per favicon size.
    Scalable { font: FontVec, path: PathBuf },
    /// Built-in 8x8 bitmap font. Ignores the requested size.
    Builtin,
}

impl FaviconFont {
    pub fn is_builtin(&self) -> bool {
        matches!(self, Self::Builtin)
    }

    /// Human-readable source of this font for logs.
    pub fn source_name(&self) -> String {
        match self {
            Self::Scalable { path, .. } => path.display().to_string(),
            Self::Builtin => "built-in 8x8 bitmap".into(),
        }
    }

    /// Scale whose em square spans `px_size` pixels.
    ///
    /// `PxScale` measures ascent-to-descent height, which is usually taller
    /// than the em square, so the requested size is converted through the
    /// font's units-per-em.
    pub fn scale_for(&self, px_size: u32) -> PxScale {
        match self {
            Self::Scalable { font, .. } => {
                em_scale(px_size, font.height_unscaled(), font.units_per_em())
            }
            Self::Builtin => PxScale::from(BUILTIN_CELL as f32),
        }
    }
}

/// Convert an em size in pixels to a `PxScale` from unscaled font metrics.
///
/// Fonts without a usable units-per-em take `px_size` as the scale.
fn em_scale(px_size: u32, height_unscaled: f32, units_per_em: Option<f32>) -> PxScale {
    let px = px_size as f32;
    match units_per_em {
        Some(upem) if upem > 0.0 => PxScale::from(px * height_unscaled / upem),
        _ => PxScale::from(px),
    }
}

impl std::fmt::Debug for FaviconFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scalable { path, .. } => f.debug_struct("Scalable").field("path", path).finish(),
            Self::Builtin => f.write_str("Builtin"),
        }
    }
}

/// Load one font file. Collections (`.ttc`) use their first face.
pub fn load_font_file(path: &Path) -> Result<FaviconFont, EngineError> {
    let data = std::fs::read(path)?;
    let font = FontVec::try_from_vec(data).map_err(|e| EngineError::FontLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(FaviconFont::Scalable {
        font,
        path: path.to_path_buf(),
    })
}

/// Pick the first loadable candidate, falling back to the built-in font.
pub fn resolve_font<P: AsRef<Path>>(candidates: &[P]) -> FaviconFont {
    for candidate in candidates {
        let path = candidate.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "Font candidate not found");
            continue;
        }
        match load_font_file(path) {
            Ok(font) => {
                info!(path = %path.display(), "Using font");
                return font;
            }
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Skipping unusable font");
            }
        }
    }

    info!("No font candidate usable, falling back to built-in bitmap font");
    FaviconFont::Builtin
}

/// Rows of the built-in glyph for `ch`, least significant bit leftmost.
///
/// Characters outside the basic Latin block render as blank cells.
pub fn builtin_glyph(ch: char) -> [u8; 8] {
    use font8x8::UnicodeFonts;
    font8x8::BASIC_FONTS.get(ch).unwrap_or([0; 8])
}
