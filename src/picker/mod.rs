//! Start-file selection.
//!
//! The interactive file dialog is stateful UI machinery outside the
//! pipeline's control, so it sits behind a small trait and the pipeline
//! stays testable without any UI.

use crate::constants::AUDIO_EXTENSIONS;
use crate::listing::SetRole;
use std::path::PathBuf;

/// Selects the starting file of a recording set.
pub trait StartFilePicker {
    /// Pick the first file of the given set, or `None` when cancelled.
    fn select_start_file(&self, role: SetRole) -> Option<PathBuf>;
}

/// Picker backed by the native open-file dialog.
#[derive(Debug, Default, Clone, Copy)]
pub struct DialogPicker;

impl StartFilePicker for DialogPicker {
    fn select_start_file(&self, role: SetRole) -> Option<PathBuf> {
        let title = format!(
            "Select the FIRST file in the {} folder",
            role.to_string().to_uppercase()
        );
        rfd::FileDialog::new()
            .set_title(title.as_str())
            .add_filter("Audio Files", AUDIO_EXTENSIONS)
            .add_filter("All Files", &["*"])
            .pick_file()
    }
}

/// Picker with pre-selected start files, used when both are passed on the
/// command line.
#[derive(Debug, Clone, Default)]
pub struct PresetPicker {
    /// Start file for the proofing set.
    pub proofing: Option<PathBuf>,
    /// Start file for the master set.
    pub master: Option<PathBuf>,
}

impl StartFilePicker for PresetPicker {
    fn select_start_file(&self, role: SetRole) -> Option<PathBuf> {
        match role {
            SetRole::Proofing => self.proofing.clone(),
            SetRole::Master => self.master.clone(),
        }
    }
}
