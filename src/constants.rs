//! Application-wide constants.

/// Audio file extensions accepted when listing a folder (case-insensitive).
pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav"];

/// Filename keywords that exclude a file from comparison
/// (case-insensitive substring match).
pub const NOISE_KEYWORDS: &[&str] = &["intro", "outro", "sample"];

/// Upper bound for sequence numbers found mid-filename.
///
/// Digit runs embedded in the middle of a name are only trusted below this
/// value, so sample rates or bitrates in filenames are not mistaken for
/// sequence numbers.
pub const MAX_EMBEDDED_SEQUENCE: u64 = 1000;

/// Maximum duration difference in seconds that still counts as a match.
/// The threshold is inclusive.
pub const MATCH_THRESHOLD_SECS: f64 = 6.0;

/// Report file constants.
pub mod report {
    /// CSV header row.
    pub const CSV_HEADER: &str =
        "Proofing File,Master File,Proofing Length,Master Length,Difference,Match";

    /// Prefix of the report filename.
    pub const FILENAME_PREFIX: &str = "duration_compare_";

    /// Timestamp format embedded in the report filename.
    pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
}
