//! Positional alignment of two folder listings.

use crate::error::{Error, Result};
use crate::listing::{AudioFile, FolderListing, SetRole};

/// Index window over two listings selected for comparison.
///
/// Pairing is purely positional: files are matched by rank after sorting,
/// starting from the user-chosen anchors, never by sequence-number key. A
/// leading gap or extra file on one side shifts every subsequent pair; the
/// alignment does not re-synchronize. Known limitation, kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentWindow {
    /// Start index into the proofing listing.
    pub proofing_start: usize,
    /// Start index into the master listing.
    pub master_start: usize,
    /// Number of aligned pairs.
    pub overlap: usize,
}

impl AlignmentWindow {
    /// Compute the window from start indices and listing lengths.
    ///
    /// Start indices must lie within their listings.
    pub fn new(
        proofing_start: usize,
        master_start: usize,
        proofing_len: usize,
        master_len: usize,
    ) -> Self {
        let overlap = (proofing_len - proofing_start).min(master_len - master_start);
        Self {
            proofing_start,
            master_start,
            overlap,
        }
    }

    /// Walk both listings in lockstep over the overlap.
    pub fn aligned_pairs<'a>(
        &self,
        proofing: &'a [AudioFile],
        master: &'a [AudioFile],
    ) -> impl Iterator<Item = (&'a AudioFile, &'a AudioFile)> {
        proofing[self.proofing_start..self.proofing_start + self.overlap]
            .iter()
            .zip(&master[self.master_start..self.master_start + self.overlap])
    }

    /// Proofing files beyond the overlap, with no master counterpart.
    pub fn unmatched_proofing<'a>(&self, proofing: &'a [AudioFile]) -> &'a [AudioFile] {
        &proofing[self.proofing_start + self.overlap..]
    }

    /// Master files beyond the overlap, with no proofing counterpart.
    pub fn unmatched_master<'a>(&self, master: &'a [AudioFile]) -> &'a [AudioFile] {
        &master[self.master_start + self.overlap..]
    }
}

/// Locate the chosen start files in their listings and build the window.
///
/// The chosen basenames must match a listing entry exactly; a start file
/// that was filtered out as noise or has no extractable sequence number
/// aborts the run before any report is written.
pub fn locate_window(
    proofing: &FolderListing,
    master: &FolderListing,
    proofing_first: &str,
    master_first: &str,
) -> Result<AlignmentWindow> {
    let proofing_start =
        proofing
            .position_of(proofing_first)
            .ok_or_else(|| Error::StartFileNotFound {
                role: SetRole::Proofing,
                name: proofing_first.to_string(),
            })?;
    let master_start = master
        .position_of(master_first)
        .ok_or_else(|| Error::StartFileNotFound {
            role: SetRole::Master,
            name: master_first.to_string(),
        })?;

    Ok(AlignmentWindow::new(
        proofing_start,
        master_start,
        proofing.files.len(),
        master.files.len(),
    ))
}
