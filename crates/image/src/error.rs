//! Error types for badge validation and formatting.

use thiserror::Error;

/// Result type alias for badge operations.
pub type Result<T> = std::result::Result<T, BadgeError>;

/// Errors that can occur while validating or formatting a badge.
///
/// Every variant is terminal: validation stops at the first violated rule
/// and the message is what the user sees.
#[derive(Debug, Error)]
pub enum BadgeError {
    /// Input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Image header could not be parsed
    #[error("Could not read image metadata.")]
    MetadataUnreadable,

    /// Declared format is not PNG
    #[error("Image format is not PNG.")]
    WrongFormat,

    /// Width or height exceeds the badge size limit
    #[error("Image is too large: {width}x{height} exceeds the 512x512 limit.")]
    Oversize {
        /// Reported image width in pixels
        width: u32,
        /// Reported image height in pixels
        height: u32,
    },

    /// Visible pixels found outside the inscribed circle
    #[error("Non-transparent pixels found outside the circular badge area.")]
    NonCircular,

    /// Dominant color did not pass the mood rules
    #[error("Image colors do not look happy.")]
    NotHappy,

    /// Invalid image data
    #[error("Invalid image data: {0}")]
    InvalidData(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Image processing error
    #[cfg(feature = "processing")]
    #[error("Image processing error: {0}")]
    ProcessingError(#[from] image::ImageError),
}
