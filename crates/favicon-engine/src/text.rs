//! Text rendering for favicon images.
//!
//! Text is positioned from its draw origin, the top-left corner of the
//! ascender line. Measurement returns the inked bounding box relative to
//! that origin, and centering only uses the box's width and height.

use ab_glyph::{Font, FontVec, PxScale, Rect, ScaleFont, point};
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;
use tracing::debug;

use crate::font::{BUILTIN_CELL, FaviconFont, builtin_glyph};

/// Fully transparent white background.
pub const TRANSPARENT: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Font size as a fraction of the favicon edge length.
pub const FONT_SIZE_RATIO: f32 = 0.7;

/// Inked bounding box relative to the draw origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBox {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    fn union(self, other: TextBox) -> TextBox {
        TextBox {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

/// Pixel bounds of each inked glyph, laid out the way `draw_text_mut` does.
fn outline_bounds(font: &FontVec, scale: PxScale, text: &str) -> Vec<Rect> {
    let scaled = font.as_scaled(scale);
    let mut caret = 0.0f32;
    let mut last: Option<ab_glyph::GlyphId> = None;
    let mut bounds = Vec::new();

    for ch in text.chars() {
        let glyph_id = scaled.glyph_id(ch);
        let glyph = glyph_id.with_scale_and_position(scale, point(caret, scaled.ascent()));
        caret += scaled.h_advance(glyph_id);
        if let Some(outlined) = font.outline_glyph(glyph) {
            if let Some(last) = last {
                caret += scaled.kern(glyph_id, last);
            }
            last = Some(glyph_id);
            bounds.push(outlined.px_bounds());
        }
    }

    bounds
}

/// Measure the inked box of `text` drawn at `px_size`.
///
/// Returns an empty box at the origin when nothing is inked.
pub fn measure_text(font: &FaviconFont, px_size: u32, text: &str) -> TextBox {
    let boxes: Vec<TextBox> = match font {
        FaviconFont::Scalable { font: outline, .. } => {
            outline_bounds(outline, font.scale_for(px_size), text)
                .into_iter()
                .map(|r| TextBox {
                    left: r.min.x.round() as i32,
                    top: r.min.y.round() as i32,
                    right: r.max.x.round() as i32,
                    bottom: r.max.y.round() as i32,
                })
                .collect()
        }
        FaviconFont::Builtin => text
            .chars()
            .enumerate()
            .filter_map(|(i, ch)| builtin_ink_box(ch, i as i32 * BUILTIN_CELL as i32))
            .collect(),
    };

    boxes.into_iter().reduce(TextBox::union).unwrap_or_default()
}

fn builtin_ink_box(ch: char, x_offset: i32) -> Option<TextBox> {
    let rows = builtin_glyph(ch);
    let mut bbox: Option<TextBox> = None;
    for (y, bits) in rows.iter().enumerate() {
        for x in 0..BUILTIN_CELL {
            if bits & (1 << x) == 0 {
                continue;
            }
            let px = TextBox {
                left: x_offset + x as i32,
                top: y as i32,
                right: x_offset + x as i32 + 1,
                bottom: y as i32 + 1,
            };
            bbox = Some(bbox.map_or(px, |b| b.union(px)));
        }
    }
    bbox
}

/// Offsets that center a box of the given size on a square canvas.
///
/// Uses floor division, so text wider than the canvas yields negative
/// offsets and is clipped on both sides.
pub fn centered_origin(size: u32, text_box: &TextBox) -> (i32, i32) {
    let size = size as i32;
    (
        (size - text_box.width()).div_euclid(2),
        (size - text_box.height()).div_euclid(2),
    )
}

/// Draw `text` with its origin at `(x, y)`. Pixels off the canvas are dropped.
pub fn draw_text(
    img: &mut RgbaImage,
    font: &FaviconFont,
    px_size: u32,
    (x, y): (i32, i32),
    text: &str,
    color: Rgba<u8>,
) {
    match font {
        FaviconFont::Scalable { font: outline, .. } => {
            draw_text_mut(img, color, x, y, font.scale_for(px_size), outline, text);
        }
        FaviconFont::Builtin => {
            for (i, ch) in text.chars().enumerate() {
                let cell_x = x + i as i32 * BUILTIN_CELL as i32;
                for (row, bits) in builtin_glyph(ch).iter().enumerate() {
                    for col in 0..BUILTIN_CELL {
                        if bits & (1 << col) == 0 {
                            continue;
                        }
                        let px = cell_x + col as i32;
                        let py = y + row as i32;
                        if px < 0 || py < 0 {
                            continue;
                        }
                        if (px as u32) < img.width() && (py as u32) < img.height() {
                            img.put_pixel(px as u32, py as u32, color);
                        }
                    }
                }
            }
        }
    }
}

/// Render `text` centered on a transparent `size`x`size` canvas.
pub fn render_text_favicon(
    size: u32,
    text: &str,
    color: Rgba<u8>,
    font: &FaviconFont,
) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(size, size, TRANSPARENT);
    let px_size = (size as f32 * FONT_SIZE_RATIO) as u32;

    let text_box = measure_text(font, px_size, text);
    let origin = centered_origin(size, &text_box);

    debug!(
        size,
        px_size,
        text_width = text_box.width(),
        text_height = text_box.height(),
        x = origin.0,
        y = origin.1,
        "Drawing favicon text"
    );

    draw_text(&mut img, font, px_size, origin, text, color);
    img
}
