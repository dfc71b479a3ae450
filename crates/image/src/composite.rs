//! Alpha compositing operators.

use crate::{BadgeError, Result};
use image::RgbaImage;

/// Composite `mask` onto `dst` with the destination-in operator.
///
/// Destination color channels are kept; destination alpha becomes
/// `dst_alpha * mask_alpha / 255`. Only the mask's alpha channel
/// participates, so its color content is irrelevant.
pub fn destination_in(dst: &mut RgbaImage, mask: &RgbaImage) -> Result<()> {
    if dst.dimensions() != mask.dimensions() {
        return Err(BadgeError::InvalidData(format!(
            "destination-in operands differ in size: {:?} vs {:?}",
            dst.dimensions(),
            mask.dimensions()
        )));
    }

    for (dst_pixel, mask_pixel) in dst.pixels_mut().zip(mask.pixels()) {
        dst_pixel[3] = mul_div255(dst_pixel[3], mask_pixel[3]);
    }

    Ok(())
}

/// Multiply two 8-bit channel values, rounding the /255 renormalization.
fn mul_div255(a: u8, b: u8) -> u8 {
    ((u16::from(a) * u16::from(b) + 127) / 255) as u8
}
