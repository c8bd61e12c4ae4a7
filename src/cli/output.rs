//! Output formatting and progress indicators
//!
//! Utilities for progress bars and formatted messages. Progress display is
//! purely observational; the pipeline behaves identically without it.

use indicatif::{ProgressBar, ProgressStyle};

use crate::infra::download::ProgressCallback;

/// Create a byte progress bar labelled with an archive name
pub fn create_extract_bar(archive: &str) -> ProgressBar {
    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec})")
            .expect("Invalid progress bar template")
            .progress_chars("█▓▒░"),
    );
    pb.set_message(archive.to_string());
    pb
}

/// Extraction observer backed by an indicatif bar
///
/// The total uncompressed size is only known once the archive is open, so
/// the bar length is set from the first callback.
pub fn extract_progress(archive: &str) -> ProgressCallback {
    let pb = create_extract_bar(archive);
    Box::new(move |written, total| {
        if pb.length() != Some(total) {
            pb.set_length(total);
        }
        pb.set_position(written);
        if total > 0 && written >= total {
            pb.finish();
        }
    })
}

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";
}

/// Display an error to stderr
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} {error:#}", status::ERROR);
}
