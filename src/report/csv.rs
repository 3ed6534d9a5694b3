//! CSV report writer.

use crate::constants::report::CSV_HEADER;
use crate::error::Result;
use crate::report::format::{classify, format_mins_secs};
use crate::report::{ComparisonRow, RowStatus};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes comparison rows to a comma-delimited report file.
///
/// The writer exclusively owns the file handle for the run; `finalize`
/// flushes buffered rows before the handle is dropped.
pub struct ReportWriter {
    writer: BufWriter<File>,
}

impl ReportWriter {
    /// Create the report file, truncating any previous content.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }

    /// Write the fixed header row.
    pub fn write_header(&mut self) -> Result<()> {
        writeln!(self.writer, "{CSV_HEADER}")?;
        Ok(())
    }

    /// Write one comparison row.
    ///
    /// Aligned pairs get both filenames, both formatted durations, the
    /// formatted absolute difference, and the match status. Unmatched rows
    /// carry only their own side's filename and duration.
    pub fn write_row(&mut self, row: &ComparisonRow) -> Result<()> {
        let fields = match row {
            ComparisonRow::Aligned {
                proofing_name,
                master_name,
                proofing_secs,
                master_secs,
            } => {
                let difference = (proofing_secs - master_secs).abs();
                [
                    escape_csv(proofing_name),
                    escape_csv(master_name),
                    format_mins_secs(*proofing_secs),
                    format_mins_secs(*master_secs),
                    format_mins_secs(difference),
                    classify(difference).to_string(),
                ]
            }
            ComparisonRow::UnmatchedProofing { name, secs } => [
                escape_csv(name),
                String::new(),
                format_mins_secs(*secs),
                String::new(),
                String::new(),
                RowStatus::UnmatchedProofing.to_string(),
            ],
            ComparisonRow::UnmatchedMaster { name, secs } => [
                String::new(),
                escape_csv(name),
                String::new(),
                format_mins_secs(*secs),
                String::new(),
                RowStatus::UnmatchedMaster.to_string(),
            ],
        };

        writeln!(self.writer, "{}", fields.join(","))?;
        Ok(())
    }

    /// Flush buffered rows to disk.
    pub fn finalize(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Escape a value for CSV output.
fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_header_and_aligned_row() {
        let file = NamedTempFile::new().unwrap();
        let mut writer = ReportWriter::create(file.path()).unwrap();

        writer.write_header().unwrap();
        writer
            .write_row(&ComparisonRow::Aligned {
                proofing_name: "01.mp3".to_string(),
                master_name: "01.wav".to_string(),
                proofing_secs: 180.0,
                master_secs: 183.0,
            })
            .unwrap();
        writer.finalize().unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(
            lines[0],
            "Proofing File,Master File,Proofing Length,Master Length,Difference,Match"
        );
        assert_eq!(lines[1], "01.mp3,01.wav,3:00,3:03,0:03,Matched");
    }

    #[test]
    fn test_mismatch_row() {
        let file = NamedTempFile::new().unwrap();
        let mut writer = ReportWriter::create(file.path()).unwrap();

        writer
            .write_row(&ComparisonRow::Aligned {
                proofing_name: "02.mp3".to_string(),
                master_name: "02.wav".to_string(),
                proofing_secs: 200.0,
                master_secs: 250.0,
            })
            .unwrap();
        writer.finalize().unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(
            contents.trim_end(),
            "02.mp3,02.wav,3:20,4:10,0:50,Duration mismatch >6s"
        );
    }

    #[test]
    fn test_unmatched_rows_leave_other_side_empty() {
        let file = NamedTempFile::new().unwrap();
        let mut writer = ReportWriter::create(file.path()).unwrap();

        writer
            .write_row(&ComparisonRow::UnmatchedProofing {
                name: "09.mp3".to_string(),
                secs: 61.0,
            })
            .unwrap();
        writer
            .write_row(&ComparisonRow::UnmatchedMaster {
                name: "10.wav".to_string(),
                secs: 59.0,
            })
            .unwrap();
        writer.finalize().unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "09.mp3,,1:01,,,Unmatched Proofing File");
        assert_eq!(lines[1], ",10.wav,,0:59,,Unmatched Master File");
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("simple.mp3"), "simple.mp3");
        assert_eq!(escape_csv("with,comma.mp3"), "\"with,comma.mp3\"");
        assert_eq!(escape_csv("with\"quote.mp3"), "\"with\"\"quote.mp3\"");
    }
}
