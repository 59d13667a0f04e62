//! Scoped glyph measurement backed by fontdue.

use fontdue::{Font, LineMetrics};

use glyphmask_core::CellSize;

/// A scoped measurement of one glyph: acquire, read, release.
///
/// The probe copies the raw numbers it needs out of the font and holds
/// nothing else, so no measurement artifact outlives the measuring
/// call.
pub struct GlyphProbe {
    raw_width: f32,
    raw_height: f32,
}

impl GlyphProbe {
    /// Measure `ch` at `size` pixels.
    pub fn acquire(font: &Font, ch: char, size: f32) -> Self {
        // Fonts without horizontal line metrics get a size-based
        // estimate.
        let line = font
            .horizontal_line_metrics(size)
            .unwrap_or(LineMetrics {
                ascent: size * 0.8,
                descent: -(size * 0.2),
                line_gap: 0.0,
                new_line_size: size,
            });
        let glyph = font.metrics(ch, size);
        Self {
            raw_width: glyph.advance_width,
            raw_height: line.ascent - line.descent,
        }
    }

    /// The layout cell for this glyph: raw advance width, line height
    /// trimmed by 20% so glyph rows tile without visible gaps.
    pub fn cell(&self) -> CellSize {
        CellSize::new(
            (self.raw_width.ceil() as u32).max(1),
            trimmed_height(self.raw_height),
        )
    }
}

/// `floor(raw - raw * 0.2)`: drops the line-height padding, clamped to
/// at least one pixel so sampling can always step.
pub(crate) fn trimmed_height(raw: f32) -> u32 {
    (((raw - raw * 0.2).floor()) as u32).max(1)
}
