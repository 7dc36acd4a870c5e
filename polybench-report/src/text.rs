//! Plain-text Output
//!
//! One block per trial:
//!
//! ```text
//!
//! ---
//! For a degree: 100
//! Evaluation for a given x = 0.25
//! Results in: 1.3333
//! Time of horner's algoritm: 412.000000 ns.
//! Time of classic evaluation: 3.120000 ms.
//! ---
//! ```

use crate::record::TrialRecord;
use crate::time_units::format_readable_time;
use crate::{ReportError, ReportSink};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Render one trial as a text block
pub fn format_text_block(record: &TrialRecord) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str("---\n");
    output.push_str(&format!("For a degree: {}\n", record.degree));
    output.push_str(&format!("Evaluation for a given x = {}\n", record.position));
    output.push_str(&format!("Results in: {}\n", record.result));
    output.push_str(&format!(
        "Time of horner's algoritm: {}\n",
        format_readable_time(record.horner_ns)
    ));
    output.push_str(&format!(
        "Time of classic evaluation: {}\n",
        format_readable_time(record.naive_ns_or_zero())
    ));
    output.push_str("---\n");

    output
}

/// Sink writing text blocks, flushed after every trial
pub struct TextSink<W: Write> {
    writer: W,
}

impl TextSink<BufWriter<File>> {
    /// Create (or truncate) the report file at `path`
    pub fn create(path: impl AsRef<Path>) -> Result<Self, ReportError> {
        let file = File::create(path.as_ref())?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> TextSink<W> {
    /// Wrap an arbitrary writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for TextSink<W> {
    fn record(&mut self, record: &TrialRecord) -> Result<(), ReportError> {
        self.writer.write_all(format_text_block(record).as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> TrialRecord {
        TrialRecord {
            degree: 3,
            position: 0.5,
            result: 1.375,
            result_lo: 0.0,
            horner_ns: 50_000,
            naive_ns: Some(500_000),
        }
    }

    #[test]
    fn test_block_layout() {
        let block = format_text_block(&sample_record());
        let expected = "\n---\n\
            For a degree: 3\n\
            Evaluation for a given x = 0.5\n\
            Results in: 1.375\n\
            Time of horner's algoritm: 50000.000000 ns.\n\
            Time of classic evaluation: 5.000000 ms.\n\
            ---\n";
        assert_eq!(block, expected);
    }

    #[test]
    fn test_skipped_naive_renders_zero() {
        let record = TrialRecord {
            naive_ns: None,
            ..sample_record()
        };
        let block = format_text_block(&record);
        assert!(block.contains("Time of classic evaluation: 0.000000 ns.\n"));
    }

    #[test]
    fn test_sink_appends_blocks() {
        let mut sink = TextSink::new(Vec::new());
        sink.record(&sample_record()).unwrap();
        sink.record(&sample_record()).unwrap();

        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(text.matches("For a degree: 3").count(), 2);
        assert_eq!(text.matches("---\n").count(), 4);
    }

    #[test]
    fn test_create_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("algorithm_result.txt");
        std::fs::write(&path, "stale output from a previous run\n").unwrap();

        let mut sink = TextSink::create(&path).unwrap();
        sink.record(&sample_record()).unwrap();
        drop(sink);

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(!text.contains("stale"));
        assert!(text.starts_with("\n---\nFor a degree: 3\n"));
    }
}
