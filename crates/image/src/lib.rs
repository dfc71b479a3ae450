//! Circular badge validation and formatting for Badgekit.
//!
//! This crate provides:
//! - Format detection from magic bytes
//! - Header metadata extraction without a full decode
//! - Circular alpha-mask generation (raw buffer or encoded PNG)
//! - Circularity validation against the inscribed circle
//! - Dominant-color mood classification in HSL space
//! - Destination-in alpha compositing and badge formatting

#![warn(missing_docs)]

mod detect;
mod error;
mod geometry;
mod metadata;
mod mood;

#[cfg(feature = "processing")]
mod circularity;

#[cfg(feature = "processing")]
mod composite;

#[cfg(feature = "processing")]
mod format;

#[cfg(feature = "processing")]
mod mask;

#[cfg(feature = "processing")]
mod stats;

#[cfg(feature = "processing")]
mod validate;

pub use detect::{detect_format, ImageFormat};
pub use error::{BadgeError, Result};
pub use geometry::Circle;
pub use metadata::{extract_metadata, ImageMetadata};
pub use mood::{Hsl, MoodRules};

#[cfg(feature = "processing")]
pub use circularity::{check_circularity, ALPHA_VISIBILITY_THRESHOLD};

#[cfg(feature = "processing")]
pub use composite::destination_in;

#[cfg(feature = "processing")]
pub use format::{format_badge, DEFAULT_OUTPUT};

#[cfg(feature = "processing")]
pub use mask::{circular_mask, circular_mask_png};

#[cfg(feature = "processing")]
pub use stats::dominant_color;

#[cfg(feature = "processing")]
pub use validate::{validate_badge, MAX_DIMENSION};
