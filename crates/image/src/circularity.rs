//! Circularity validation against the inscribed circle.

use crate::geometry::Circle;
use crate::{BadgeError, Result};
use image::RgbaImage;

/// Highest alpha an exterior pixel may carry before it counts as visible.
///
/// Near-fully-transparent pixels outside the circle (typically anti-aliasing
/// residue in the source) are tolerated; anything above this leaks content
/// outside the circular crop.
pub const ALPHA_VISIBILITY_THRESHOLD: u8 = 50;

/// Check that every visible pixel lies inside the inscribed circle.
///
/// Scans row-major, top to bottom; per row the exterior columns left of the
/// interior interval are checked before those right of it. Fails with
/// [`BadgeError::NonCircular`] on the first exterior pixel whose alpha
/// exceeds [`ALPHA_VISIBILITY_THRESHOLD`]. The input is never mutated.
pub fn check_circularity(img: &RgbaImage) -> Result<()> {
    let (width, height) = img.dimensions();
    let circle = Circle::inscribed(width, height);

    for y in 0..height {
        // Rows outside the circle's vertical extent have no interior columns
        let span = circle.row_span(y).unwrap_or(0..0);
        let left = 0..span.start;
        let right = span.end..width;

        for x in left.chain(right) {
            if img.get_pixel(x, y)[3] > ALPHA_VISIBILITY_THRESHOLD {
                return Err(BadgeError::NonCircular);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::circular_mask;
    use image::Rgba;

    fn opaque_disc(size: u32) -> RgbaImage {
        let mut img = circular_mask(size, size);
        for pixel in img.pixels_mut() {
            if pixel[3] == 255 {
                *pixel = Rgba([10, 180, 30, 255]);
            }
        }
        img
    }

    #[test]
    fn accepts_an_opaque_disc() {
        assert!(check_circularity(&opaque_disc(64)).is_ok());
    }

    #[test]
    fn accepts_a_fully_transparent_image() {
        let img = RgbaImage::new(16, 16);
        assert!(check_circularity(&img).is_ok());
    }

    #[test]
    fn rejects_an_opaque_square() {
        let img = RgbaImage::from_pixel(32, 32, Rgba([255, 0, 0, 255]));
        assert!(matches!(
            check_circularity(&img),
            Err(BadgeError::NonCircular)
        ));
    }

    #[test]
    fn tolerates_faint_exterior_pixels() {
        let mut img = opaque_disc(32);
        img.put_pixel(0, 0, Rgba([255, 255, 255, ALPHA_VISIBILITY_THRESHOLD]));
        assert!(check_circularity(&img).is_ok());
    }

    #[test]
    fn rejects_a_visible_corner_pixel() {
        let mut img = opaque_disc(32);
        img.put_pixel(0, 0, Rgba([255, 255, 255, ALPHA_VISIBILITY_THRESHOLD + 1]));
        assert!(matches!(
            check_circularity(&img),
            Err(BadgeError::NonCircular)
        ));
    }

    #[test]
    fn interior_pixels_may_be_any_alpha() {
        let mut img = opaque_disc(32);
        // Half-transparent pixel at the center is still inside the circle
        img.put_pixel(16, 16, Rgba([0, 0, 0, 128]));
        assert!(check_circularity(&img).is_ok());
    }

    #[test]
    fn non_square_images_use_the_shorter_side() {
        // 40x16: circle of radius 8 centered at (20, 8); a visible pixel
        // at the far left edge sits outside it
        let mut img = RgbaImage::new(40, 16);
        img.put_pixel(0, 8, Rgba([0, 0, 0, 255]));
        assert!(matches!(
            check_circularity(&img),
            Err(BadgeError::NonCircular)
        ));
    }
}
