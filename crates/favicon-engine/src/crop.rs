//! Square crop geometry for logo artwork.
//!
//! The circular mark is expected at the left edge of the logo, so the crop
//! is anchored at `x = 0` and centered vertically.

use image::DynamicImage;
use tracing::debug;

use crate::EngineError;

/// Square region selected from the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub left: u32,
    pub top: u32,
    pub side: u32,
}

impl CropRect {
    pub fn right(&self) -> u32 {
        self.left + self.side
    }

    pub fn bottom(&self) -> u32 {
        self.top + self.side
    }
}

/// Compute the left-anchored, vertically centered square crop.
pub fn square_crop_rect(width: u32, height: u32) -> Result<CropRect, EngineError> {
    if width == 0 || height == 0 {
        return Err(EngineError::EmptyImage { width, height });
    }

    let side = width.min(height);
    Ok(CropRect {
        left: 0,
        top: (height - side) / 2,
        side,
    })
}

/// Crop the square region returned by [`square_crop_rect`].
pub fn crop_square(img: &DynamicImage) -> Result<DynamicImage, EngineError> {
    let rect = square_crop_rect(img.width(), img.height())?;

    debug!(
        orig_w = img.width(),
        orig_h = img.height(),
        left = rect.left,
        top = rect.top,
        side = rect.side,
        "Cropping square from logo"
    );

    Ok(img.crop_imm(rect.left, rect.top, rect.side, rect.side))
}
