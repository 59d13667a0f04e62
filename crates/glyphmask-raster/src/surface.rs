//! An in-memory RGBA canvas implementing the drawing primitives.

use std::sync::Arc;

use fontdue::Font;

use glyphmask_core::{PixelBuffer, Point, Rect, Rgba, Surface, SurfaceError};

/// A software canvas over an RGBA pixel buffer.
///
/// Created seeded with the decoded image pixels. Draws clip silently at
/// the buffer edge, matching immediate-mode canvas behavior.
pub struct RasterSurface {
    font: Arc<Font>,
    pixels: PixelBuffer,
    fill: Rgba,
    font_size: f32,
}

impl RasterSurface {
    pub(crate) fn new(font: Arc<Font>, buffer: &PixelBuffer) -> Self {
        Self {
            font,
            pixels: buffer.clone(),
            fill: Rgba::TRANSPARENT,
            font_size: 14.0,
        }
    }

    /// The rendered pixels.
    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    /// Consume the surface and take the pixels.
    pub fn into_pixels(self) -> PixelBuffer {
        self.pixels
    }
}

impl Surface for RasterSurface {
    fn clear_rect(&mut self, rect: Rect) -> Result<(), SurfaceError> {
        clear_rect_px(&mut self.pixels, rect);
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect) -> Result<(), SurfaceError> {
        fill_rect_px(&mut self.pixels, rect, self.fill);
        Ok(())
    }

    fn set_fill_style(&mut self, color: Rgba) {
        self.fill = color;
    }

    fn set_font(&mut self, size: f32, _family: &str) {
        // Single loaded font: the family is advisory for this backend.
        self.font_size = size;
    }

    fn fill_text(&mut self, ch: char, pos: Point) -> Result<(), SurfaceError> {
        let (metrics, bitmap) = self.font.rasterize(ch, self.font_size);
        if metrics.width == 0 || metrics.height == 0 {
            return Ok(()); // whitespace or empty glyph
        }

        let ascent = self
            .font
            .horizontal_line_metrics(self.font_size)
            .map(|m| m.ascent.ceil() as i64)
            .unwrap_or((self.font_size * 0.8).ceil() as i64);

        // Top-left pixel of the glyph bitmap relative to the cell
        // anchor (baseline at `ascent` below the anchor).
        let glyph_x = metrics.xmin as i64;
        let glyph_y = ascent - metrics.ymin as i64 - metrics.height as i64;

        for gy in 0..metrics.height {
            for gx in 0..metrics.width {
                let coverage = bitmap[gy * metrics.width + gx];
                if coverage == 0 {
                    continue;
                }
                let px = pos.x as i64 + glyph_x + gx as i64;
                let py = pos.y as i64 + glyph_y + gy as i64;
                if px < 0 || py < 0 {
                    continue;
                }
                let (px, py) = (px as u32, py as u32);
                let Some(dst) = self.pixels.get(px, py) else {
                    continue;
                };
                let alpha = coverage as f32 / 255.0 * self.fill.a as f32 / 255.0;
                self.pixels.put(px, py, blend_px(dst, self.fill, alpha));
            }
        }
        Ok(())
    }
}

/// Reset every pixel of `rect` (clipped to the buffer) to transparent.
pub(crate) fn clear_rect_px(buf: &mut PixelBuffer, rect: Rect) {
    for y in rect.top..rect.bottom().min(buf.height()) {
        for x in rect.left..rect.right().min(buf.width()) {
            buf.put(x, y, Rgba::TRANSPARENT);
        }
    }
}

/// Source-over fill of `rect` (clipped to the buffer) with `color`.
pub(crate) fn fill_rect_px(buf: &mut PixelBuffer, rect: Rect, color: Rgba) {
    if color.a == 0 {
        return; // fully transparent paint leaves the surface untouched
    }
    let alpha = color.a as f32 / 255.0;
    for y in rect.top..rect.bottom().min(buf.height()) {
        for x in rect.left..rect.right().min(buf.width()) {
            if let Some(dst) = buf.get(x, y) {
                buf.put(x, y, blend_px(dst, color, alpha));
            }
        }
    }
}

/// Alpha-blend `src` over `dst` with the given effective alpha.
pub(crate) fn blend_px(dst: Rgba, src: Rgba, alpha: f32) -> Rgba {
    Rgba::new(
        blend(dst.r, src.r, alpha),
        blend(dst.g, src.g, alpha),
        blend(dst.b, src.b, alpha),
        blend(dst.a, src.a, alpha),
    )
}

/// Simple alpha-blend of two u8 color channels.
fn blend(bg: u8, fg: u8, alpha: f32) -> u8 {
    ((1.0 - alpha) * bg as f32 + alpha * fg as f32) as u8
}
