//! PNG data-URI encoding of finished surfaces.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use log::debug;

use glyphmask_core::{EncodeError, PixelBuffer};

/// Encode the buffer as a `data:image/png;base64,...` URI.
pub fn png_data_uri(buffer: &PixelBuffer) -> Result<String, EncodeError> {
    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(
            buffer.data(),
            buffer.width(),
            buffer.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| EncodeError::new(e.to_string()))?;

    debug!(
        "encoded {}x{} surface into {} PNG bytes",
        buffer.width(),
        buffer.height(),
        png.len()
    );
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(png)))
}
