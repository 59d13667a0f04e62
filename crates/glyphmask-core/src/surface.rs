//! Collaborator seams for drawing: [`GlyphMetrics`], [`Surface`], and
//! [`SurfaceFactory`].

use std::fmt;

use crate::error::{EncodeError, SurfaceError};
use crate::geom::{Point, Rect};
use crate::pixels::{PixelBuffer, Rgba};

// ---------------------------------------------------------------------------
// CellSize / GlyphMetrics
// ---------------------------------------------------------------------------

/// The fixed advance box occupied by one glyph, in pixels. Used as the
/// sampling and layout step size; both dimensions are always > 0.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellSize {
    pub width: u32,
    pub height: u32,
}

impl CellSize {
    /// Create a new cell size.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for CellSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Measures the pixel box a glyph occupies under a given font and size.
///
/// A mask operation calls this exactly once, on the first character of
/// the mask text (fixed-advance assumption: the first character's box is
/// reused for every cell). Implementations must be deterministic and
/// must not leave any transient measurement state behind after
/// returning.
pub trait GlyphMetrics {
    /// Measure `ch` at `size` pixels in `family`. Both dimensions of
    /// the returned cell are at least 1.
    fn measure(&mut self, ch: char, size: f32, family: &str) -> CellSize;
}

// ---------------------------------------------------------------------------
// Surface / SurfaceFactory
// ---------------------------------------------------------------------------

/// A 2D immediate-mode drawing surface.
///
/// The five canvas-style primitives the mosaic renderer needs. Fill
/// tint and font are surface state set ahead of the draws that use
/// them; the state setters themselves cannot fail.
pub trait Surface {
    /// Remove all content inside `rect`.
    fn clear_rect(&mut self, rect: Rect) -> Result<(), SurfaceError>;

    /// Paint `rect` with the current fill tint.
    fn fill_rect(&mut self, rect: Rect) -> Result<(), SurfaceError>;

    /// Set the fill tint used by subsequent fills and text draws.
    fn set_fill_style(&mut self, color: Rgba);

    /// Set the font used by subsequent text draws.
    fn set_font(&mut self, size: f32, family: &str);

    /// Draw `ch` in the current tint, anchored at `pos` (top-left of
    /// the glyph cell).
    fn fill_text(&mut self, ch: char, pos: Point) -> Result<(), SurfaceError>;
}

/// Creates surfaces seeded with decoded image content and encodes a
/// finished surface into the output artifact.
///
/// Seeding means the new surface already holds the image pixels, so a
/// mask operation only redraws the mask region and the rest of the
/// image passes through untouched.
pub trait SurfaceFactory {
    type Surface: Surface;

    /// Create a surface holding a copy of `buffer`.
    fn surface(&mut self, buffer: &PixelBuffer) -> Result<Self::Surface, SurfaceError>;

    /// Consume the finished surface and produce the encoded artifact
    /// (for the raster backend, a `data:image/png;base64,...` URI).
    fn encode(&mut self, surface: Self::Surface) -> Result<String, EncodeError>;
}
