//! Non-recursive folder listing for audio comparison.

use crate::constants::{AUDIO_EXTENSIONS, NOISE_KEYWORDS};
use crate::error::{Error, Result};
use crate::listing::extract_sequence_number;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A single audio file with its inferred sequence number.
///
/// Immutable once extracted. Sequence numbers are not unique within a
/// folder; duplicates sort stably by enumeration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioFile {
    /// Sequence number inferred from the filename.
    pub sequence: u64,
    /// Basename of the file, extension included.
    pub name: String,
}

/// An ordered folder scan result, sorted ascending by sequence number.
#[derive(Debug, Clone)]
pub struct FolderListing {
    /// Folder the files were listed from.
    pub folder: PathBuf,
    /// Surviving files, sorted by sequence number.
    pub files: Vec<AudioFile>,
}

impl FolderListing {
    /// Full path of a listed file.
    pub fn path_of(&self, file: &AudioFile) -> PathBuf {
        self.folder.join(&file.name)
    }

    /// Position of a file in the listing by exact basename match.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.files.iter().position(|f| f.name == name)
    }
}

/// List a folder's audio files, non-recursively.
///
/// Keeps files with an allowed extension, drops noise files (`intro`,
/// `outro`, `sample`) and files without an extractable sequence number, then
/// sorts ascending by sequence number. The sort is stable, so duplicate
/// sequence numbers keep their enumeration order; that order is
/// filesystem-dependent and not guaranteed across platforms.
pub fn list_audio_files(folder: &Path) -> Result<FolderListing> {
    let entries = std::fs::read_dir(folder).map_err(|source| Error::FolderRead {
        path: folder.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| Error::FolderRead {
            path: folder.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() || !is_audio_file(&path) {
            continue;
        }

        // to_string_lossy() keeps non-UTF-8 filenames from aborting the scan.
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_noise_file(&name) {
            debug!("Skipping noise file: {name}");
            continue;
        }

        match extract_sequence_number(&name) {
            Some(sequence) => files.push(AudioFile { sequence, name }),
            None => debug!("Skipping file without sequence number: {name}"),
        }
    }

    files.sort_by_key(|f| f.sequence);

    Ok(FolderListing {
        folder: folder.to_path_buf(),
        files,
    })
}

/// Check if a file has one of the accepted audio extensions.
fn is_audio_file(path: &Path) -> bool {
    use std::ffi::OsStr;

    path.extension().is_some_and(|ext| {
        AUDIO_EXTENSIONS
            .iter()
            .any(|allowed| ext.eq_ignore_ascii_case(OsStr::new(allowed)))
    })
}

/// Check if a filename contains a noise keyword, case-insensitively.
fn is_noise_file(name: &str) -> bool {
    let lower = name.to_lowercase();
    NOISE_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).unwrap();
    }

    #[test]
    fn test_sorts_by_sequence_number_not_lexically() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "10_ten.mp3");
        touch(dir.path(), "2_two.mp3");
        touch(dir.path(), "1_one.mp3");

        let listing = list_audio_files(dir.path()).unwrap();
        let sequences: Vec<u64> = listing.files.iter().map(|f| f.sequence).collect();
        assert_eq!(sequences, vec![1, 2, 10]);
    }

    #[test]
    fn test_noise_files_excluded_case_insensitive() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "01_Intro.mp3");
        touch(dir.path(), "02_OUTRO.wav");
        touch(dir.path(), "03_Sample take.mp3");
        touch(dir.path(), "04_chapter.mp3");

        let listing = list_audio_files(dir.path()).unwrap();
        assert_eq!(listing.files.len(), 1);
        assert_eq!(listing.files[0].name, "04_chapter.mp3");
    }

    #[test]
    fn test_non_audio_and_unnumbered_dropped() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "01_notes.txt");
        touch(dir.path(), "chapter.wav");
        touch(dir.path(), "05_five.MP3");

        let listing = list_audio_files(dir.path()).unwrap();
        assert_eq!(listing.files.len(), 1);
        assert_eq!(listing.files[0].name, "05_five.MP3");
        assert_eq!(listing.files[0].sequence, 5);
    }

    #[test]
    fn test_position_of_exact_match() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "01.mp3");
        touch(dir.path(), "02.mp3");

        let listing = list_audio_files(dir.path()).unwrap();
        assert_eq!(listing.position_of("02.mp3"), Some(1));
        assert_eq!(listing.position_of("02"), None);
    }

    #[test]
    fn test_missing_folder_is_an_error() {
        let result = list_audio_files(Path::new("/nonexistent/folder"));
        assert!(matches!(result, Err(Error::FolderRead { .. })));
    }

    #[test]
    fn test_path_of_joins_folder() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "07.wav");

        let listing = list_audio_files(dir.path()).unwrap();
        let path = listing.path_of(&listing.files[0]);
        assert_eq!(path, dir.path().join("07.wav"));
    }
}
