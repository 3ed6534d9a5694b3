//! External media-duration probing.

use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, warn};

/// Errors from the external duration probe.
///
/// These never abort a run: the pipeline collapses them to a sentinel
/// duration of `0.0` at the boundary, so one bad file cannot sink a whole
/// comparison. The failed side then shows up in the report as `0:00`,
/// usually with a large mismatch.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// The probe tool could not be started.
    #[error("failed to invoke ffprobe for '{path}'")]
    Invoke {
        /// Path to the file being probed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The probe tool exited with a failure status.
    #[error("ffprobe exited with code {exit_code} for '{path}': {stderr}")]
    CommandFailed {
        /// Path to the file being probed.
        path: PathBuf,
        /// Process exit code (-1 if terminated by a signal).
        exit_code: i32,
        /// Captured standard error output.
        stderr: String,
    },

    /// The probe tool produced output that is not a duration.
    #[error("ffprobe returned unparseable duration '{output}' for '{path}'")]
    Parse {
        /// Path to the file being probed.
        path: PathBuf,
        /// The output that failed to parse.
        output: String,
    },
}

/// Measures the playback duration of a media file.
pub trait DurationProbe {
    /// Duration of the file at `path` in seconds.
    fn duration_secs(&self, path: &Path) -> Result<f64, ProbeError>;
}

/// Duration probe backed by the `ffprobe` command-line tool.
///
/// Requests only the container `format=duration` field as plain text and
/// blocks until the subprocess exits. There is no timeout.
#[derive(Debug, Default, Clone, Copy)]
pub struct FfprobeProbe;

impl DurationProbe for FfprobeProbe {
    fn duration_secs(&self, path: &Path) -> Result<f64, ProbeError> {
        debug!("Probing duration: {}", path.display());

        let output = Command::new("ffprobe")
            .args([
                "-v",
                "error",
                "-show_entries",
                "format=duration",
                "-of",
                "default=noprint_wrappers=1:nokey=1",
            ])
            .arg(path)
            .output()
            .map_err(|source| ProbeError::Invoke {
                path: path.to_path_buf(),
                source,
            })?;

        if !output.status.success() {
            return Err(ProbeError::CommandFailed {
                path: path.to_path_buf(),
                exit_code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let trimmed = stdout.trim();
        trimmed.parse().map_err(|_| ProbeError::Parse {
            path: path.to_path_buf(),
            output: trimmed.to_string(),
        })
    }
}

/// Probe a duration, collapsing any failure to `0.0`.
///
/// The failure stays visible in the log; the caller keeps going.
pub fn duration_or_zero(probe: &dyn DurationProbe, path: &Path) -> f64 {
    match probe.duration_secs(path) {
        Ok(secs) => secs,
        Err(e) => {
            warn!("Duration probe failed, recording 0.0: {e}");
            0.0
        }
    }
}
