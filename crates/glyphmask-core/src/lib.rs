//! **glyphmask-core** — text-mosaic image redaction (core types and
//! algorithm).
//!
//! This crate provides the heart of *glyphmask*: replacing a rectangular
//! region of a raster image with a grid of text glyphs, each tinted with
//! the color sampled from the image at that grid cell. Image decoding,
//! font measurement, drawing, and output encoding are collaborator seams
//! ([`PixelSource`], [`GlyphMetrics`], [`Surface`], [`SurfaceFactory`])
//! implemented by backend crates.

pub mod cycle;
pub mod error;
pub mod geom;
pub mod mask;
pub mod options;
pub mod pixels;
pub mod render;
pub mod sampler;
pub mod surface;

pub use cycle::CharacterCycle;
pub use error::{AcquireError, EncodeError, MaskError, SurfaceError};
pub use geom::{Point, Rect};
pub use mask::{Masker, Phase};
pub use options::{MaskOptions, MaskOverrides, ResolvedMask};
pub use pixels::{PixelBuffer, PixelSource, Rgba};
pub use sampler::{Sample, count_steps, sample};
pub use surface::{CellSize, GlyphMetrics, Surface, SurfaceFactory};
