//! Folder listing and sequence-number extraction.

mod folder;
mod sequence;

pub use folder::{AudioFile, FolderListing, list_audio_files};
pub use sequence::extract_sequence_number;

use std::fmt;

/// Which of the two compared recording sets a file or folder belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetRole {
    /// First-pass recordings being checked.
    Proofing,
    /// Final reference recordings being checked against.
    Master,
}

impl fmt::Display for SetRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Proofing => f.write_str("proofing"),
            Self::Master => f.write_str("master"),
        }
    }
}
