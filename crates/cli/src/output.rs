//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use owo_colors::{OwoColorize, Stream};

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print a validation failure to stderr.
    ///
    /// The line reads `Validation failed: <message>`; coloring is applied
    /// only when stderr is a terminal, so piped output carries the plain
    /// text.
    pub fn failure(message: &str) {
        eprintln!(
            "{}: {}",
            "Validation failed".if_supports_color(Stream::Stderr, |text| text.red()),
            message
        );
    }
}

/// Format a file size for display
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
