//! The one-shot mask operation: acquire → measure → sample → render →
//! encode.

use std::fmt;

use log::debug;

use crate::cycle::CharacterCycle;
use crate::error::MaskError;
use crate::options::{MaskOptions, MaskOverrides};
use crate::pixels::PixelSource;
use crate::surface::{GlyphMetrics, SurfaceFactory};
use crate::{render, sampler};

// ---------------------------------------------------------------------------
// Phase
// ---------------------------------------------------------------------------

/// Phases of a mask operation, in execution order.
///
/// An operation runs each phase once and is terminal on completion or
/// failure; a failed operation restarts from the beginning if
/// reattempted. Transitions are logged at debug level.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    AcquiringImage,
    MeasuringGlyph,
    Sampling,
    Rendering,
    Encoding,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AcquiringImage => "acquiring image",
            Self::MeasuringGlyph => "measuring glyph",
            Self::Sampling => "sampling",
            Self::Rendering => "rendering",
            Self::Encoding => "encoding",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Masker
// ---------------------------------------------------------------------------

/// Redacts a rectangular region of an image with a text mosaic.
///
/// Generic over its three collaborators: `P` acquires pixels, `G`
/// measures glyphs, `F` creates and encodes drawing surfaces. A
/// `Masker` holds no per-operation state; each [`mask`](Masker::mask)
/// call owns its own character cycle and sample list, so operations
/// never share mutable state.
pub struct Masker<P, G, F> {
    source_ref: String,
    source: P,
    metrics: G,
    factory: F,
    options: MaskOptions,
}

impl<P, G, F> Masker<P, G, F>
where
    P: PixelSource,
    G: GlyphMetrics,
    F: SurfaceFactory,
{
    /// Create a masker for the image behind `source_ref`.
    ///
    /// Fails with [`MaskError::MissingSource`] if `source_ref` is
    /// empty; no operation is attempted.
    pub fn new(
        source_ref: impl Into<String>,
        source: P,
        metrics: G,
        factory: F,
    ) -> Result<Self, MaskError> {
        let source_ref = source_ref.into();
        if source_ref.is_empty() {
            return Err(MaskError::MissingSource);
        }
        Ok(Self {
            source_ref,
            source,
            metrics,
            factory,
            options: MaskOptions::default(),
        })
    }

    /// The base options applied before per-call overrides.
    pub fn options(&self) -> &MaskOptions {
        &self.options
    }

    /// Replace the base options.
    pub fn set_options(&mut self, options: MaskOptions) {
        self.options = options;
    }

    /// Run one mask operation and return the encoded artifact.
    ///
    /// `overrides` are applied over the base options first; unset
    /// region dimensions resolve to the natural image size once the
    /// image is acquired. The whole operation either produces a
    /// complete artifact or fails with the first error.
    pub fn mask(&mut self, overrides: MaskOverrides) -> Result<String, MaskError> {
        let mut options = self.options.clone();
        options.apply(overrides);

        debug!("mask {:?}: {}", self.source_ref, Phase::AcquiringImage);
        let buffer = self.source.load(&self.source_ref)?;
        let resolved = options.resolve(buffer.width(), buffer.height());

        // Validates the text before any measurement or sampling.
        let mut cycle = CharacterCycle::new(&resolved.text)?;

        debug!("mask {:?}: {}", self.source_ref, Phase::MeasuringGlyph);
        let cell = self
            .metrics
            .measure(cycle.peek(), resolved.font_size, &resolved.font_family);

        debug!("mask {:?}: {}", self.source_ref, Phase::Sampling);
        let samples = sampler::sample(&buffer, resolved.region, cell)?;

        debug!("mask {:?}: {}", self.source_ref, Phase::Rendering);
        let mut surface = self.factory.surface(&buffer)?;
        render::render(&mut surface, &resolved, &samples, &mut cycle)?;

        debug!("mask {:?}: {}", self.source_ref, Phase::Encoding);
        let artifact = self.factory.encode(surface)?;
        Ok(artifact)
    }
}
