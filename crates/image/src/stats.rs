//! Color statistics over decoded pixel buffers.

use image::RgbaImage;

// 4 bits per channel: 16 x 16 x 16 bins
const BINS_PER_CHANNEL: usize = 16;
const BIN_WIDTH: u8 = 16;

/// Compute the dominant color of an image.
///
/// Pixels are bucketed into a 4096-bin RGB histogram (4 bits per channel,
/// alpha ignored) and the center of the most populous bin is returned. Fully
/// transparent pixels still contribute their color channels, so a sparse
/// image can be dominated by its transparent background.
pub fn dominant_color(img: &RgbaImage) -> [u8; 3] {
    let mut bins = vec![0u32; BINS_PER_CHANNEL.pow(3)];

    for pixel in img.pixels() {
        let r = (pixel[0] / BIN_WIDTH) as usize;
        let g = (pixel[1] / BIN_WIDTH) as usize;
        let b = (pixel[2] / BIN_WIDTH) as usize;
        bins[(r * BINS_PER_CHANNEL + g) * BINS_PER_CHANNEL + b] += 1;
    }

    let dominant = bins
        .iter()
        .enumerate()
        .max_by_key(|(_, count)| **count)
        .map(|(index, _)| index)
        .unwrap_or(0);

    let r = dominant / (BINS_PER_CHANNEL * BINS_PER_CHANNEL);
    let g = dominant / BINS_PER_CHANNEL % BINS_PER_CHANNEL;
    let b = dominant % BINS_PER_CHANNEL;

    [bin_center(r), bin_center(g), bin_center(b)]
}

fn bin_center(bin: usize) -> u8 {
    bin as u8 * BIN_WIDTH + BIN_WIDTH / 2
}
