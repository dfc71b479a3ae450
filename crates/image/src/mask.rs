//! Circular alpha-mask generation.

use crate::geometry::Circle;
use crate::Result;
use image::{DynamicImage, ImageOutputFormat, Rgba, RgbaImage};
use std::io::Cursor;

/// Generate the raw circular mask for the given dimensions.
///
/// The buffer is fully transparent black except that every pixel inside the
/// inscribed circle has alpha 255. Color channels stay 0 throughout; the mask
/// carries an alpha cutout only. The same inputs always produce a
/// byte-identical buffer.
pub fn circular_mask(width: u32, height: u32) -> RgbaImage {
    let circle = Circle::inscribed(width, height);
    let mut mask = RgbaImage::new(width, height);

    for y in 0..height {
        if let Some(span) = circle.row_span(y) {
            for x in span {
                mask.put_pixel(x, y, Rgba([0, 0, 0, 255]));
            }
        }
    }

    mask
}

/// Generate the circular mask encoded as an in-memory PNG byte stream.
///
/// Derived from the same buffer as [`circular_mask`], so the two output
/// modes can never disagree about pixel membership.
pub fn circular_mask_png(width: u32, height: u32) -> Result<Vec<u8>> {
    let mask = circular_mask(width, height);
    let mut buffer = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(mask).write_to(&mut buffer, ImageOutputFormat::Png)?;
    Ok(buffer.into_inner())
}
