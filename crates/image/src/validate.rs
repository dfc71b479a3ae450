//! Validation pipeline for badge candidates.

use crate::{
    check_circularity, detect_format, dominant_color, extract_metadata, BadgeError, Hsl,
    ImageFormat, MoodRules, Result,
};
use std::path::Path;

/// Largest accepted badge width and height in pixels.
pub const MAX_DIMENSION: u32 = 512;

/// Validate a badge candidate, stopping at the first violated rule.
///
/// Checks run in order: file existence, declared format (must be PNG),
/// header dimensions (each side at most [`MAX_DIMENSION`]), circularity of
/// the decoded pixels, and finally the mood of the dominant color. The input
/// file is never modified, and running the validator twice on an unchanged
/// file yields the same outcome.
pub fn validate_badge(path: &Path, rules: &MoodRules) -> Result<()> {
    if !path.exists() {
        return Err(BadgeError::FileNotFound(path.display().to_string()));
    }

    let data = std::fs::read(path)?;

    let format = detect_format(&data).ok_or(BadgeError::MetadataUnreadable)?;
    if format != ImageFormat::Png {
        return Err(BadgeError::WrongFormat);
    }

    let metadata = extract_metadata(&data).ok_or(BadgeError::MetadataUnreadable)?;
    if metadata.width > MAX_DIMENSION || metadata.height > MAX_DIMENSION {
        return Err(BadgeError::Oversize {
            width: metadata.width,
            height: metadata.height,
        });
    }

    let img = image::load_from_memory(&data)?.to_rgba8();
    check_circularity(&img)?;

    let mood = Hsl::from_rgb(dominant_color(&img));
    if !rules.is_happy(&mood) {
        return Err(BadgeError::NotHappy);
    }

    Ok(())
}
