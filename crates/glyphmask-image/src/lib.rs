//! Image acquisition backend for glyphmask.
//!
//! Decodes filesystem paths or in-memory encoded bytes into
//! [`PixelBuffer`]s using the [`image`] crate. `load` blocks until the
//! decode completes, which is the synchronous rendition of a one-shot
//! load completion.

use image::DynamicImage;
use log::debug;

use glyphmask_core::{AcquireError, PixelBuffer, PixelSource};

/// Loads and decodes images from filesystem paths; the `source_ref` is
/// the path.
pub struct FileSource;

impl PixelSource for FileSource {
    fn load(&mut self, source_ref: &str) -> Result<PixelBuffer, AcquireError> {
        let img = image::open(source_ref)
            .map_err(|e| AcquireError::new(source_ref, e.to_string()))?;
        Ok(to_buffer(source_ref, img))
    }
}

/// Decodes one image already held in memory as encoded bytes (PNG,
/// JPEG, ...); the `source_ref` is only used for error context.
pub struct BytesSource {
    data: Vec<u8>,
}

impl BytesSource {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl PixelSource for BytesSource {
    fn load(&mut self, source_ref: &str) -> Result<PixelBuffer, AcquireError> {
        let img = image::load_from_memory(&self.data)
            .map_err(|e| AcquireError::new(source_ref, e.to_string()))?;
        Ok(to_buffer(source_ref, img))
    }
}

fn to_buffer(source_ref: &str, img: DynamicImage) -> PixelBuffer {
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    debug!("decoded {source_ref:?}: {width}x{height}");
    PixelBuffer::new(width, height, rgba.into_raw())
}
