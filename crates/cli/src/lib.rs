//! Terminal output utilities for the Badgekit CLI
//!
//! Provides status message formatting shared by the badge tools.

#![warn(missing_docs)]

pub mod output;
