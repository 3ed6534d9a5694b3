//! Report row types.

use std::fmt;

/// Status column value for a report row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStatus {
    /// Durations agree within the match threshold.
    Matched,
    /// Durations differ by more than the match threshold.
    DurationMismatch,
    /// Proofing file with no master counterpart.
    UnmatchedProofing,
    /// Master file with no proofing counterpart.
    UnmatchedMaster,
}

impl fmt::Display for RowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Matched => "Matched",
            Self::DurationMismatch => "Duration mismatch >6s",
            Self::UnmatchedProofing => "Unmatched Proofing File",
            Self::UnmatchedMaster => "Unmatched Master File",
        };
        f.write_str(s)
    }
}

/// One comparison result, produced once and written once.
#[derive(Debug, Clone, PartialEq)]
pub enum ComparisonRow {
    /// An aligned proofing/master pair.
    Aligned {
        /// Proofing filename.
        proofing_name: String,
        /// Master filename.
        master_name: String,
        /// Probed proofing duration in seconds.
        proofing_secs: f64,
        /// Probed master duration in seconds.
        master_secs: f64,
    },
    /// Proofing file beyond the overlap.
    UnmatchedProofing {
        /// Proofing filename.
        name: String,
        /// Probed duration in seconds.
        secs: f64,
    },
    /// Master file beyond the overlap.
    UnmatchedMaster {
        /// Master filename.
        name: String,
        /// Probed duration in seconds.
        secs: f64,
    },
}
