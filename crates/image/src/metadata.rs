//! Header metadata extraction.
//!
//! The dimension gate runs before any pixel data is decoded, so dimensions
//! are read straight from the PNG header. Non-PNG inputs are rejected by the
//! format gate first and never reach this parser.

use crate::{detect_format, ImageFormat};
use serde::{Deserialize, Serialize};

/// Metadata read from an image header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageMetadata {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Detected format
    pub format: ImageFormat,
    /// File size in bytes
    pub size_bytes: usize,
}

impl ImageMetadata {
    /// Check if the image is square.
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

/// Extract metadata from raw image data.
///
/// Returns `None` when the format is unrecognized or the header does not
/// carry parseable dimensions.
pub fn extract_metadata(data: &[u8]) -> Option<ImageMetadata> {
    let format = detect_format(data)?;

    let (width, height) = match format {
        ImageFormat::Png => png_dimensions(data)?,
        _ => return None,
    };

    Some(ImageMetadata {
        width,
        height,
        format,
        size_bytes: data.len(),
    })
}

/// Read dimensions from the PNG IHDR chunk.
fn png_dimensions(data: &[u8]) -> Option<(u32, u32)> {
    // 8-byte signature, then IHDR: 4 bytes length + "IHDR" + width + height
    if data.len() < 24 || &data[12..16] != b"IHDR" {
        return None;
    }

    let width = u32::from_be_bytes([data[16], data[17], data[18], data[19]]);
    let height = u32::from_be_bytes([data[20], data[21], data[22], data[23]]);

    Some((width, height))
}
