//! Badge formatting: circular masking and PNG conversion.

use crate::mask::circular_mask;
use crate::{destination_in, BadgeError, Result};
use image::{DynamicImage, ImageOutputFormat};
use std::io::Cursor;
use std::path::Path;

/// Relative path the formatted badge is written to.
pub const DEFAULT_OUTPUT: &str = "output.png";

/// Mask the input image to a circular badge and write it as a PNG.
///
/// Any decodable input format is accepted; the output is always PNG. The
/// circular mask is generated at the decoded dimensions and applied with the
/// destination-in operator, so only pixels inside the inscribed circle keep
/// their alpha. The composited image is encoded fully in memory before the
/// output file is written, so a failure never leaves a partial file, and the
/// input file is never modified.
///
/// Returns the number of bytes written.
pub fn format_badge(input: &Path, output: &Path) -> Result<u64> {
    if !input.exists() {
        return Err(BadgeError::FileNotFound(input.display().to_string()));
    }

    let data = std::fs::read(input)?;
    let mut img = image::load_from_memory(&data)?.to_rgba8();

    let (width, height) = img.dimensions();
    let mask = circular_mask(width, height);
    destination_in(&mut img, &mask)?;

    let mut buffer = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(img).write_to(&mut buffer, ImageOutputFormat::Png)?;
    let encoded = buffer.into_inner();

    std::fs::write(output, &encoded)?;
    Ok(encoded.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{validate_badge, MoodRules};
    use image::{Rgba, RgbaImage};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_square_png(dir: &TempDir, name: &str, size: u32, color: [u8; 4]) -> PathBuf {
        let path = dir.path().join(name);
        let img = RgbaImage::from_pixel(size, size, Rgba(color));
        img.save_with_format(&path, image::ImageFormat::Png).unwrap();
        path
    }

    #[test]
    fn masks_an_opaque_square_to_a_disc() {
        let dir = TempDir::new().unwrap();
        let input = write_square_png(&dir, "square.png", 10, [255, 0, 0, 255]);
        let output = dir.path().join("output.png");

        format_badge(&input, &output).unwrap();

        let result = image::open(&output).unwrap().to_rgba8();
        assert_eq!(result.get_pixel(0, 0)[3], 0);
        assert_eq!(result.get_pixel(5, 5), &Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn keeps_a_lower_source_alpha() {
        let dir = TempDir::new().unwrap();
        let input = write_square_png(&dir, "square.png", 10, [255, 0, 0, 100]);
        let output = dir.path().join("output.png");

        format_badge(&input, &output).unwrap();

        let result = image::open(&output).unwrap().to_rgba8();
        assert_eq!(result.get_pixel(5, 5)[3], 100);
    }

    #[test]
    fn formatted_output_passes_validation() {
        let dir = TempDir::new().unwrap();
        let input = write_square_png(&dir, "square.png", 64, [0, 150, 0, 255]);
        let output = dir.path().join("output.png");

        format_badge(&input, &output).unwrap();

        assert!(validate_badge(&output, &MoodRules::default()).is_ok());
    }

    #[test]
    fn converts_jpeg_input_to_png() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("photo.jpg");
        let rgb = image::RgbImage::from_pixel(20, 20, image::Rgb([80, 200, 120]));
        rgb.save_with_format(&input, image::ImageFormat::Jpeg).unwrap();
        let output = dir.path().join("output.png");

        format_badge(&input, &output).unwrap();

        let data = std::fs::read(&output).unwrap();
        assert_eq!(
            crate::detect_format(&data),
            Some(crate::ImageFormat::Png)
        );
    }

    #[test]
    fn reports_written_byte_count() {
        let dir = TempDir::new().unwrap();
        let input = write_square_png(&dir, "square.png", 10, [255, 0, 0, 255]);
        let output = dir.path().join("output.png");

        let written = format_badge(&input, &output).unwrap();
        assert_eq!(written, std::fs::metadata(&output).unwrap().len());
    }

    #[test]
    fn does_not_modify_the_input_file() {
        let dir = TempDir::new().unwrap();
        let input = write_square_png(&dir, "square.png", 10, [255, 0, 0, 255]);
        let before = std::fs::read(&input).unwrap();

        format_badge(&input, &dir.path().join("output.png")).unwrap();

        assert_eq!(std::fs::read(&input).unwrap(), before);
    }

    #[test]
    fn missing_input_leaves_no_output() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("output.png");

        let result = format_badge(&dir.path().join("absent.png"), &output);

        assert!(matches!(result, Err(BadgeError::FileNotFound(_))));
        assert!(!output.exists());
    }
}
