//! Sequence-number extraction from filenames.

use crate::constants::MAX_EMBEDDED_SEQUENCE;

/// Extract the sequence number from a filename.
///
/// Three patterns are tried in order, first success wins:
///
/// 1. A leading digit run followed by a non-digit character
///    (`"007_chapter.mp3"` -> 7, leading zeros stripped).
/// 2. A basename that is purely digits once the extension is removed
///    (`"042"` -> 42).
/// 3. The first digit run anywhere in the name, accepted only below
///    [`MAX_EMBEDDED_SEQUENCE`].
///
/// Returns `None` when no pattern applies; such files are excluded from the
/// folder listing rather than treated as errors.
pub fn extract_sequence_number(filename: &str) -> Option<u64> {
    // Leading digit run followed by a non-digit character.
    let leading = filename.len() - filename.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if leading > 0 && leading < filename.len() {
        return filename[..leading].parse().ok();
    }

    // Whole basename (minus extension) is a digit run.
    let stem = filename.rsplit_once('.').map_or(filename, |(stem, _)| stem);
    if !stem.is_empty() && stem.bytes().all(|b| b.is_ascii_digit()) {
        return stem.parse().ok();
    }

    // First digit run anywhere, guarded against large unrelated numbers
    // such as sample rates. Only the first run is considered.
    let tail = filename.trim_start_matches(|c: char| !c.is_ascii_digit());
    let run = tail.len() - tail.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if run > 0 {
        let value: u64 = tail[..run].parse().ok()?;
        if value < MAX_EMBEDDED_SEQUENCE {
            return Some(value);
        }
    }

    None
}
