//! The comparison pipeline.
//!
//! A single linear pass: select start files, list both folders, align the
//! listings, probe durations, and emit the report. Single-threaded and
//! blocking throughout; each probe invocation blocks until its subprocess
//! exits.

use crate::align::locate_window;
use crate::constants::report::{FILENAME_PREFIX, TIMESTAMP_FORMAT};
use crate::error::{Error, Result};
use crate::listing::{SetRole, list_audio_files};
use crate::picker::StartFilePicker;
use crate::probe::{DurationProbe, duration_or_zero};
use crate::report::{ComparisonRow, ReportWriter, progress};
use chrono::Local;
use directories::UserDirs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Options for a comparison run.
#[derive(Debug, Clone, Default)]
pub struct CompareOptions {
    /// Directory for the report file (`None` = the desktop).
    pub output_dir: Option<PathBuf>,
    /// Show a progress bar during the comparison loop.
    pub progress_enabled: bool,
}

/// Outcome of a completed comparison run.
#[derive(Debug, Clone)]
pub struct CompareSummary {
    /// Path of the written report.
    pub report_path: PathBuf,
    /// Number of aligned pairs compared.
    pub aligned: usize,
    /// Proofing files with no master counterpart.
    pub unmatched_proofing: usize,
    /// Master files with no proofing counterpart.
    pub unmatched_master: usize,
}

/// Run one full comparison.
///
/// Aborts without writing anything when either selection is cancelled or a
/// chosen start file is absent from its own listing; probe failures never
/// abort, they surface as `0:00` durations in the report.
pub fn run_compare(
    picker: &dyn StartFilePicker,
    probe: &dyn DurationProbe,
    options: &CompareOptions,
) -> Result<CompareSummary> {
    let proofing_first = select_start(picker, SetRole::Proofing)?;
    let master_first = select_start(picker, SetRole::Master)?;

    let proofing = list_audio_files(&parent_folder(&proofing_first))?;
    let master = list_audio_files(&parent_folder(&master_first))?;
    info!(
        "Found {} proofing and {} master file(s)",
        proofing.files.len(),
        master.files.len()
    );

    let window = locate_window(
        &proofing,
        &master,
        &basename(&proofing_first),
        &basename(&master_first),
    )?;
    info!("Comparing {} aligned pair(s)", window.overlap);

    let report_path = report_path(options.output_dir.as_deref())?;
    let mut writer = ReportWriter::create(&report_path)?;
    writer.write_header()?;

    let pb = progress::create_compare_progress(window.overlap, options.progress_enabled);
    for (proofing_file, master_file) in window.aligned_pairs(&proofing.files, &master.files) {
        let proofing_secs = duration_or_zero(probe, &proofing.path_of(proofing_file));
        let master_secs = duration_or_zero(probe, &master.path_of(master_file));
        writer.write_row(&ComparisonRow::Aligned {
            proofing_name: proofing_file.name.clone(),
            master_name: master_file.name.clone(),
            proofing_secs,
            master_secs,
        })?;
        progress::inc_progress(pb.as_ref());
    }
    progress::finish_progress(pb, "Complete");

    let unmatched_proofing = window.unmatched_proofing(&proofing.files);
    for file in unmatched_proofing {
        let secs = duration_or_zero(probe, &proofing.path_of(file));
        writer.write_row(&ComparisonRow::UnmatchedProofing {
            name: file.name.clone(),
            secs,
        })?;
    }

    let unmatched_master = window.unmatched_master(&master.files);
    for file in unmatched_master {
        let secs = duration_or_zero(probe, &master.path_of(file));
        writer.write_row(&ComparisonRow::UnmatchedMaster {
            name: file.name.clone(),
            secs,
        })?;
    }

    writer.finalize()?;

    Ok(CompareSummary {
        report_path,
        aligned: window.overlap,
        unmatched_proofing: unmatched_proofing.len(),
        unmatched_master: unmatched_master.len(),
    })
}

fn select_start(picker: &dyn StartFilePicker, role: SetRole) -> Result<PathBuf> {
    info!("Select the first file in the {role} folder");
    picker
        .select_start_file(role)
        .ok_or(Error::SelectionCancelled { role })
}

/// Folder containing the given file.
///
/// A bare filename has no parent component and is listed from the current
/// directory.
fn parent_folder(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Basename of the given file.
fn basename(path: &Path) -> String {
    path.file_name()
        .map_or_else(String::new, |n| n.to_string_lossy().into_owned())
}

/// Report path for this run, timestamped to avoid overwriting prior runs.
fn report_path(output_dir: Option<&Path>) -> Result<PathBuf> {
    let dir = output_dir.map_or_else(default_report_dir, |d| Ok(d.to_path_buf()))?;
    let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
    Ok(dir.join(report_file_name(&timestamp)))
}

/// Report filename for a formatted timestamp.
fn report_file_name(timestamp: &str) -> String {
    format!("{FILENAME_PREFIX}{timestamp}.csv")
}

/// Default report directory: the user's desktop, falling back to the home
/// directory on platforms without a desktop folder.
fn default_report_dir() -> Result<PathBuf> {
    let dirs = UserDirs::new().ok_or(Error::ReportDirNotFound)?;
    Ok(dirs
        .desktop_dir()
        .map_or_else(|| dirs.home_dir().to_path_buf(), Path::to_path_buf))
}
