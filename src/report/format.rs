//! Duration formatting and match classification.

use crate::constants::MATCH_THRESHOLD_SECS;
use crate::report::RowStatus;

/// Format a duration in seconds as `minutes:seconds`, seconds zero-padded.
///
/// Fractional seconds are truncated, not rounded: `59.999` formats as
/// `0:59`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_mins_secs(seconds: f64) -> String {
    let whole = seconds as u64;
    format!("{}:{:02}", whole / 60, whole % 60)
}

/// Classify a duration difference against the fixed match threshold.
///
/// The threshold is inclusive: a difference of exactly 6 seconds still
/// counts as matched.
pub fn classify(difference_secs: f64) -> RowStatus {
    if difference_secs <= MATCH_THRESHOLD_SECS {
        RowStatus::Matched
    } else {
        RowStatus::DurationMismatch
    }
}
