//! Error types for proofcheck.

use crate::listing::SetRole;

/// Result type alias for proofcheck operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for proofcheck.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A file-picker selection was cancelled or empty.
    #[error("no file selected for the {role} set")]
    SelectionCancelled {
        /// Set the selection was for.
        role: SetRole,
    },

    /// The chosen start file is missing from its own folder listing.
    #[error(
        "{role} start file '{name}' is not part of the folder listing \
         (it may be filtered out or have no sequence number)"
    )]
    StartFileNotFound {
        /// Set the start file belongs to.
        role: SetRole,
        /// Basename of the chosen file.
        name: String,
    },

    /// Failed to read a folder.
    #[error("failed to read folder '{path}'")]
    FolderRead {
        /// Path to the folder.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// No usable directory for the report file.
    #[error("could not determine a home directory for the report file")]
    ReportDirNotFound,
}
