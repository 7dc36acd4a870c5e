//! JSON Lines Output

use crate::record::{RunMeta, TrialRecord};
use crate::{ReportError, ReportSink};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// One line of a JSON report
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum JsonLine {
    /// Header written once per run
    Meta(RunMeta),
    /// One trial
    Trial(TrialRecord),
}

/// Sink writing a metadata header followed by one JSON object per trial
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl JsonLinesSink<BufWriter<File>> {
    /// Create (or truncate) the report file at `path` and write the header
    pub fn create(path: impl AsRef<Path>, meta: &RunMeta) -> Result<Self, ReportError> {
        let file = File::create(path.as_ref())?;
        Self::new(BufWriter::new(file), meta)
    }
}

impl<W: Write> JsonLinesSink<W> {
    /// Wrap an arbitrary writer and write the header
    pub fn new(writer: W, meta: &RunMeta) -> Result<Self, ReportError> {
        let mut sink = Self { writer };
        sink.write_line(&JsonLine::Meta(meta.clone()))?;
        Ok(sink)
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_line(&mut self, line: &JsonLine) -> Result<(), ReportError> {
        serde_json::to_writer(&mut self.writer, line)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> ReportSink for JsonLinesSink<W> {
    fn record(&mut self, record: &TrialRecord) -> Result<(), ReportError> {
        self.write_line(&JsonLine::Trial(record.clone()))
    }
}

/// Parse a JSON Lines report back into its lines
pub fn parse_json_lines(input: &str) -> Result<Vec<JsonLine>, ReportError> {
    input
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).map_err(ReportError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::SystemInfo;
    use chrono::Utc;

    fn meta() -> RunMeta {
        RunMeta {
            version: "0.1.0".to_string(),
            timestamp: Utc::now(),
            seed: 42,
            naive_cutoff: 100_000,
            system: SystemInfo {
                os: "linux".to_string(),
                arch: "x86_64".to_string(),
                cpu: "Unknown".to_string(),
                cpu_cores: 1,
            },
        }
    }

    #[test]
    fn test_header_then_trials() {
        let mut sink = JsonLinesSink::new(Vec::new(), &meta()).unwrap();
        sink.record(&TrialRecord {
            degree: 200_000,
            position: 0.3,
            result: 1.2,
            result_lo: 0.0,
            horner_ns: 900,
            naive_ns: None,
        })
        .unwrap();

        let text = String::from_utf8(sink.into_inner()).unwrap();
        let lines = parse_json_lines(&text).unwrap();
        assert_eq!(lines.len(), 2);

        match &lines[0] {
            JsonLine::Meta(m) => assert_eq!(m.seed, 42),
            other => panic!("expected meta, got {other:?}"),
        }
        match &lines[1] {
            JsonLine::Trial(t) => {
                assert_eq!(t.degree, 200_000);
                assert!(t.naive_skipped());
            }
            other => panic!("expected trial, got {other:?}"),
        }
    }

    #[test]
    fn test_tagged_layout() {
        let mut sink = JsonLinesSink::new(Vec::new(), &meta()).unwrap();
        sink.record(&TrialRecord {
            degree: 1,
            position: 0.5,
            result: 1.0,
            result_lo: 0.0,
            horner_ns: 10,
            naive_ns: Some(20),
        })
        .unwrap();

        let text = String::from_utf8(sink.into_inner()).unwrap();
        let last = text.lines().last().unwrap();
        let value: serde_json::Value = serde_json::from_str(last).unwrap();
        assert_eq!(value["type"], "trial");
        assert_eq!(value["naive_ns"], 20);
    }

    #[test]
    fn test_trailing_precision_survives() {
        let mut sink = JsonLinesSink::new(Vec::new(), &meta()).unwrap();
        sink.record(&TrialRecord {
            degree: 2,
            position: 0.4,
            result: 1.0,
            result_lo: 1e-20,
            horner_ns: 10,
            naive_ns: Some(20),
        })
        .unwrap();

        let text = String::from_utf8(sink.into_inner()).unwrap();
        match parse_json_lines(&text).unwrap().last() {
            Some(JsonLine::Trial(t)) => assert_eq!(t.result_lo, 1e-20),
            other => panic!("expected trial, got {other:?}"),
        }
    }

    #[test]
    fn test_trailing_precision_defaults_to_zero() {
        let line = r#"{"type":"trial","degree":1,"position":0.5,"result":1.0,"horner_ns":1,"naive_ns":null}"#;
        match parse_json_lines(line).unwrap().first() {
            Some(JsonLine::Trial(t)) => assert_eq!(t.result_lo, 0.0),
            other => panic!("expected trial, got {other:?}"),
        }
    }

    #[test]
    fn test_garbage_is_an_error() {
        assert!(parse_json_lines("{not json}\n").is_err());
    }
}
