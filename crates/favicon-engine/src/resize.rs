//! Square resizing for favicon output.
//!
//! Uses Lanczos3 filtering for high-quality downsampling.

use image::DynamicImage;
use image::imageops::FilterType;
use tracing::debug;

/// Resize an image to exactly `size`x`size` pixels.
///
/// Returns the original image unchanged if it already matches the target size.
pub fn resize_square(img: &DynamicImage, size: u32) -> DynamicImage {
    let (orig_w, orig_h) = (img.width(), img.height());

    if orig_w == size && orig_h == size {
        debug!(size, "Image already at target size, skipping resize");
        return img.clone();
    }

    debug!(orig_w, orig_h, size, "Resizing image to favicon size");

    img.resize_exact(size, size, FilterType::Lanczos3)
}
