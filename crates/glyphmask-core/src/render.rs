//! The mosaic renderer: drives a [`Surface`] from an ordered sample
//! list.

use log::trace;

use crate::cycle::CharacterCycle;
use crate::error::MaskError;
use crate::options::ResolvedMask;
use crate::sampler::Sample;
use crate::surface::Surface;

/// Clear and refill the mask region, then draw one tinted glyph per
/// sample, pulling characters from `cycle` in sample order.
///
/// Later draws composite over earlier ones: the region is cleared, the
/// background fill goes down first, then the glyphs. The first surface
/// failure aborts the whole operation; there are no retries.
pub fn render<S: Surface>(
    surface: &mut S,
    resolved: &ResolvedMask,
    samples: &[Sample],
    cycle: &mut CharacterCycle,
) -> Result<(), MaskError> {
    surface.clear_rect(resolved.region)?;
    surface.set_fill_style(resolved.background);
    surface.fill_rect(resolved.region)?;

    for sample in samples {
        trace!("glyph at {} in {}", sample.pos, sample.color);
        surface.set_fill_style(sample.color);
        surface.set_font(resolved.font_size, &resolved.font_family);
        surface.fill_text(cycle.next_char(), sample.pos)?;
    }
    Ok(())
}
