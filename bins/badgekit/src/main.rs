//! badgekit: validate and format circular badge images.

use badgekit_cli::output::{format_size, Status};
use badgekit_image::{format_badge, validate_badge, MoodRules, DEFAULT_OUTPUT};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "badgekit")]
#[command(about = "Validate an image as a circular badge, or mask it into one")]
#[command(version)]
struct Cli {
    /// Path to the input image
    filepath: PathBuf,

    /// Validate only; do not write an output file
    #[arg(long)]
    check: bool,
}

fn main() {
    let cli = Cli::parse();

    // Validation failures report a message but keep the success exit code
    if cli.check {
        match validate_badge(&cli.filepath, &MoodRules::default()) {
            Ok(()) => Status::success(&format!(
                "{} is a valid badge.",
                cli.filepath.display()
            )),
            Err(err) => Status::failure(&err.to_string()),
        }
    } else {
        match format_badge(&cli.filepath, Path::new(DEFAULT_OUTPUT)) {
            Ok(written) => Status::success(&format!(
                "Badge written to {DEFAULT_OUTPUT} ({})",
                format_size(written)
            )),
            Err(err) => Status::failure(&err.to_string()),
        }
    }
}
