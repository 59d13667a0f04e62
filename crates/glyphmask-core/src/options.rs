//! Mask configuration: [`MaskOptions`], [`MaskOverrides`], and the
//! fully-resolved [`ResolvedMask`].

use crate::geom::Rect;
use crate::pixels::Rgba;

// ---------------------------------------------------------------------------
// MaskOptions
// ---------------------------------------------------------------------------

/// Configuration for one mask operation.
///
/// `width`/`height` left at `None` resolve to the natural image
/// dimensions once the image has been acquired (see
/// [`MaskOptions::resolve`]).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaskOptions {
    /// Top edge of the mask region, in image coordinates.
    pub top: u32,
    /// Left edge of the mask region, in image coordinates.
    pub left: u32,
    /// Mask width in pixels; `None` means the full image width.
    pub width: Option<u32>,
    /// Mask height in pixels; `None` means the full image height.
    pub height: Option<u32>,
    /// Text whose characters tile the region, round-robin.
    pub text: String,
    /// Font size in pixels.
    pub font_size: f32,
    /// Font family. A monospace family works best: layout assumes the
    /// first character's advance for every cell.
    pub font_family: String,
    /// Color painted under the glyphs after the region is cleared.
    pub background: Rgba,
}

impl Default for MaskOptions {
    fn default() -> Self {
        Self {
            top: 0,
            left: 0,
            width: None,
            height: None,
            text: "mark".into(),
            font_size: 14.0,
            font_family: "Monospace".into(),
            background: Rgba::TRANSPARENT,
        }
    }
}

impl MaskOptions {
    /// Apply the set fields of `overrides` over `self`, leaving unset
    /// fields untouched.
    pub fn apply(&mut self, overrides: MaskOverrides) {
        if let Some(top) = overrides.top {
            self.top = top;
        }
        if let Some(left) = overrides.left {
            self.left = left;
        }
        if let Some(width) = overrides.width {
            self.width = Some(width);
        }
        if let Some(height) = overrides.height {
            self.height = Some(height);
        }
        if let Some(text) = overrides.text {
            self.text = text;
        }
        if let Some(font_size) = overrides.font_size {
            self.font_size = font_size;
        }
        if let Some(font_family) = overrides.font_family {
            self.font_family = font_family;
        }
        if let Some(background) = overrides.background {
            self.background = background;
        }
    }

    /// Produce a fully-concrete mask once the natural image size is
    /// known. This must happen after acquisition and before sampling.
    pub fn resolve(&self, natural_width: u32, natural_height: u32) -> ResolvedMask {
        ResolvedMask {
            region: Rect::new(
                self.left,
                self.top,
                self.width.unwrap_or(natural_width),
                self.height.unwrap_or(natural_height),
            ),
            text: self.text.clone(),
            font_size: self.font_size,
            font_family: self.font_family.clone(),
            background: self.background,
        }
    }
}

// ---------------------------------------------------------------------------
// MaskOverrides
// ---------------------------------------------------------------------------

/// Per-call option overrides, applied explicitly over the defaults.
/// Every field is optional; unset fields keep their current value.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaskOverrides {
    pub top: Option<u32>,
    pub left: Option<u32>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub text: Option<String>,
    pub font_size: Option<f32>,
    pub font_family: Option<String>,
    pub background: Option<Rgba>,
}

// ---------------------------------------------------------------------------
// ResolvedMask
// ---------------------------------------------------------------------------

/// A mask with every default resolved; ready for sampling and
/// rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedMask {
    pub region: Rect,
    pub text: String,
    pub font_size: f32,
    pub font_family: String,
    pub background: Rgba,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference() {
        let opts = MaskOptions::default();
        assert_eq!(opts.top, 0);
        assert_eq!(opts.left, 0);
        assert_eq!(opts.width, None);
        assert_eq!(opts.height, None);
        assert_eq!(opts.text, "mark");
        assert_eq!(opts.font_size, 14.0);
        assert_eq!(opts.font_family, "Monospace");
        assert_eq!(opts.background, Rgba::TRANSPARENT);
    }

    #[test]
    fn unset_size_resolves_to_natural_dimensions() {
        let opts = MaskOptions::default();
        let resolved = opts.resolve(259, 194);
        assert_eq!(resolved.region, Rect::new(0, 0, 259, 194));
    }

    #[test]
    fn explicit_size_survives_resolution() {
        let mut opts = MaskOptions::default();
        opts.apply(MaskOverrides {
            left: Some(10),
            top: Some(20),
            width: Some(100),
            height: Some(50),
            ..Default::default()
        });
        let resolved = opts.resolve(259, 194);
        assert_eq!(resolved.region, Rect::new(10, 20, 100, 50));
    }

    #[test]
    fn explicit_zero_is_not_treated_as_unset() {
        let mut opts = MaskOptions::default();
        opts.apply(MaskOverrides {
            width: Some(0),
            ..Default::default()
        });
        let resolved = opts.resolve(259, 194);
        assert_eq!(resolved.region.width, 0);
        assert_eq!(resolved.region.height, 194);
    }

    #[test]
    fn apply_leaves_unset_fields_untouched() {
        let mut opts = MaskOptions::default();
        opts.apply(MaskOverrides {
            text: Some("just for fun".into()),
            ..Default::default()
        });
        assert_eq!(opts.text, "just for fun");
        assert_eq!(opts.font_size, 14.0);
        assert_eq!(opts.font_family, "Monospace");
    }
}
