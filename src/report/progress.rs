//! Progress bar utilities for the comparison loop.

use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar over the aligned pairs.
pub fn create_compare_progress(total_pairs: usize, enabled: bool) -> Option<ProgressBar> {
    if !enabled || total_pairs == 0 {
        return None;
    }

    let pb = ProgressBar::new(total_pairs as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} pairs ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░ "),
    );
    Some(pb)
}

/// Increment a progress bar.
pub fn inc_progress(pb: Option<&ProgressBar>) {
    if let Some(pb) = pb {
        pb.inc(1);
    }
}

/// Finish a progress bar with a message.
pub fn finish_progress(pb: Option<ProgressBar>, message: &str) {
    if let Some(pb) = pb {
        pb.finish_with_message(message.to_string());
    }
}
