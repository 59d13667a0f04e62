//! Mask a region of an image with a text mosaic and print the result
//! as a PNG data URI.
//!
//! ```sh
//! mask-image photo.png mono.ttf "just for fun" > masked.txt
//! ```
//!
//! Without a region the whole image is redacted; set `RUST_LOG=debug`
//! to watch the operation's phases.

use std::env;
use std::process::ExitCode;

use glyphmask_core::{MaskOverrides, Masker};
use glyphmask_image::FileSource;
use glyphmask_raster::RasterBackend;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let (image_path, font_path) = match (args.get(1), args.get(2)) {
        (Some(image), Some(font)) => (image.clone(), font.clone()),
        _ => {
            eprintln!("usage: mask-image <image> <font.ttf> [text]");
            return ExitCode::FAILURE;
        }
    };
    let text = args.get(3).cloned();

    match run(&image_path, &font_path, text) {
        Ok(uri) => {
            println!("{uri}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(
    image_path: &str,
    font_path: &str,
    text: Option<String>,
) -> Result<String, Box<dyn std::error::Error>> {
    let font_data = std::fs::read(font_path)?;
    let backend = RasterBackend::new(&font_data)?;
    let mut masker = Masker::new(image_path, FileSource, backend.clone(), backend)?;
    let uri = masker.mask(MaskOverrides {
        text,
        ..Default::default()
    })?;
    Ok(uri)
}
