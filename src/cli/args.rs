//! CLI argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// Compare proofing and master audio track durations.
#[derive(Debug, Parser)]
#[command(name = "proofcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// First file of the proofing set (skips the proofing file dialog).
    #[arg(
        long,
        value_name = "FILE",
        requires = "master_start",
        env = "PROOFCHECK_PROOFING_START"
    )]
    pub proofing_start: Option<PathBuf>,

    /// First file of the master set (skips the master file dialog).
    #[arg(
        long,
        value_name = "FILE",
        requires = "proofing_start",
        env = "PROOFCHECK_MASTER_START"
    )]
    pub master_start: Option<PathBuf>,

    /// Directory for the report file (default: the desktop).
    #[arg(short, long, value_name = "DIR", env = "PROOFCHECK_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Suppress progress output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable the progress bar.
    #[arg(long)]
    pub no_progress: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
