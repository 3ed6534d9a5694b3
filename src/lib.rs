//! Proofcheck - proofing vs. master audio duration comparison.
//!
//! Compares two ordered sets of audio recordings, matching files by an
//! inferred sequence number, and reports duration differences to a CSV file.

#![warn(missing_docs)]

pub mod align;
pub mod cli;
pub mod constants;
pub mod error;
pub mod listing;
pub mod picker;
pub mod pipeline;
pub mod probe;
pub mod report;

use clap::Parser;
use cli::Cli;
use picker::{DialogPicker, PresetPicker, StartFilePicker};
use pipeline::{CompareOptions, run_compare};
use probe::FfprobeProbe;
use tracing::info;

pub use error::{Error, Result};

/// Main entry point for the proofcheck CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let options = CompareOptions {
        output_dir: cli.output_dir.clone(),
        progress_enabled: !cli.quiet && !cli.no_progress,
    };

    // Start files given on the command line bypass the dialogs entirely;
    // clap guarantees the flags come in pairs.
    let picker: Box<dyn StartFilePicker> =
        if cli.proofing_start.is_some() || cli.master_start.is_some() {
            Box::new(PresetPicker {
                proofing: cli.proofing_start.clone(),
                master: cli.master_start.clone(),
            })
        } else {
            Box::new(DialogPicker)
        };

    let summary = run_compare(picker.as_ref(), &FfprobeProbe, &options)?;

    info!(
        "Compared {} aligned pair(s), {} unmatched proofing, {} unmatched master",
        summary.aligned, summary.unmatched_proofing, summary.unmatched_master
    );
    println!("Report written to: {}", summary.report_path.display());

    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt().with_env_filter(filter).init();
}
