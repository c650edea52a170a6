use std::io::Cursor;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat};

use crate::config::{OutputConfig, OutputFormat};
use crate::error::Result;

/// An encoded still, ready for preview or export.
#[derive(Clone, Debug)]
pub struct EncodedImage {
    pub format: OutputFormat,
    pub width: u32,
    pub height: u32,
    pub bytes: Vec<u8>,
}

/// Load a picture from disk, decoding whatever format `image` recognises.
pub fn load_picture(path: &Path) -> Result<DynamicImage> {
    Ok(image::open(path)?)
}

/// Decode a picture from an in-memory buffer.
pub fn decode_picture(bytes: &[u8]) -> Result<DynamicImage> {
    Ok(image::load_from_memory(bytes)?)
}

/// Encode `image` per `output`. JPEG has no alpha channel, so it is dropped.
pub fn encode(image: &DynamicImage, output: &OutputConfig) -> Result<EncodedImage> {
    let mut bytes = Vec::new();

    match output.format {
        OutputFormat::Jpeg => {
            let encoder = JpegEncoder::new_with_quality(&mut bytes, output.quality.clamp(1, 100));
            image.to_rgb8().write_with_encoder(encoder)?;
        }
        OutputFormat::Png => {
            image
                .to_rgba8()
                .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        }
    }

    Ok(EncodedImage {
        format: output.format,
        width: image.width(),
        height: image.height(),
        bytes,
    })
}

/// Write an encoded image to disk as-is.
pub fn save_encoded(encoded: &EncodedImage, path: &Path) -> Result<()> {
    std::fs::write(path, &encoded.bytes)?;
    Ok(())
}

/// Choose an output format from the file extension, falling back to
/// `fallback` for unknown or missing extensions.
pub fn format_from_path(path: &Path, fallback: OutputFormat) -> OutputFormat {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg" | "jpeg") => OutputFormat::Jpeg,
        Some("png") => OutputFormat::Png,
        _ => fallback,
    }
}
