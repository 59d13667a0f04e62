//! Software rendering backend for glyphmask.
//!
//! Implements the core collaborator seams with:
//! - [`fontdue`] for lightweight glyph measurement and rasterization
//! - [`image`] + [`base64`] for PNG data-URI output encoding
//!
//! # Usage
//!
//! ```rust,no_run
//! use glyphmask_core::{Masker, MaskOverrides};
//! use glyphmask_image::FileSource;
//! use glyphmask_raster::RasterBackend;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let font_data = std::fs::read("mono.ttf")?;
//! let backend = RasterBackend::new(&font_data)?;
//! let mut masker = Masker::new("photo.png", FileSource, backend.clone(), backend)?;
//! let data_uri = masker.mask(MaskOverrides {
//!     text: Some("redacted".into()),
//!     ..Default::default()
//! })?;
//! # Ok(())
//! # }
//! ```

mod encode;
mod metrics;
mod surface;

use std::fmt;
use std::sync::Arc;

use fontdue::{Font, FontSettings};
use log::trace;

use glyphmask_core::{
    CellSize, EncodeError, GlyphMetrics, PixelBuffer, SurfaceError, SurfaceFactory,
};

pub use encode::png_data_uri;
pub use metrics::GlyphProbe;
pub use surface::RasterSurface;

// ---------------------------------------------------------------------------
// RasterError
// ---------------------------------------------------------------------------

/// Error type for backend construction.
#[derive(Debug)]
pub enum RasterError {
    /// The font data could not be parsed.
    InvalidFont,
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::InvalidFont => write!(f, "invalid font data"),
        }
    }
}

impl std::error::Error for RasterError {}

// ---------------------------------------------------------------------------
// RasterBackend
// ---------------------------------------------------------------------------

/// Software backend: fontdue glyph metrics plus in-memory RGBA surfaces
/// encoded as PNG data URIs.
///
/// Holds one loaded font; the `font_family` option is advisory for this
/// backend. Cloning is cheap (the parsed font is shared).
#[derive(Clone, Debug)]
pub struct RasterBackend {
    font: Arc<Font>,
}

impl RasterBackend {
    /// Create a backend from raw TTF/OTF font data.
    pub fn new(font_data: &[u8]) -> Result<Self, RasterError> {
        let font = Font::from_bytes(font_data, FontSettings::default())
            .map_err(|_| RasterError::InvalidFont)?;
        Ok(Self {
            font: Arc::new(font),
        })
    }
}

impl GlyphMetrics for RasterBackend {
    fn measure(&mut self, ch: char, size: f32, family: &str) -> CellSize {
        let probe = GlyphProbe::acquire(&self.font, ch, size);
        let cell = probe.cell();
        trace!("measured {ch:?} at {size}px ({family}): {cell}");
        cell
    }
}

impl SurfaceFactory for RasterBackend {
    type Surface = RasterSurface;

    fn surface(&mut self, buffer: &PixelBuffer) -> Result<RasterSurface, SurfaceError> {
        Ok(RasterSurface::new(self.font.clone(), buffer))
    }

    fn encode(&mut self, surface: RasterSurface) -> Result<String, EncodeError> {
        png_data_uri(surface.pixels())
    }
}
