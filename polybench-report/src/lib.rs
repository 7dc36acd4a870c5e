#![warn(missing_docs)]
//! PolyBench Report - Trial Records and Sinks
//!
//! Every trial produces one [`TrialRecord`], which is handed to a
//! [`ReportSink`] immediately. Available sinks:
//! - Text (the `algorithm_result.txt` block format)
//! - JSON Lines (machine-readable, with a run-metadata header)
//! - Memory (collects records, mostly for tests and embedding)

mod json;
mod record;
mod text;
mod time_units;

pub use json::{JsonLine, JsonLinesSink, parse_json_lines};
pub use record::{RunMeta, SystemInfo, TrialRecord};
pub use text::{TextSink, format_text_block};
pub use time_units::{
    MS_UNITS_PER_SEC, NS_PER_MS_UNIT, SECS_PER_MIN, TimeUnit, format_readable_time,
    scale_duration,
};

use thiserror::Error;

/// Errors raised while writing a report
#[derive(Debug, Error)]
pub enum ReportError {
    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Consumer of trial records
pub trait ReportSink {
    /// Persist one trial
    fn record(&mut self, record: &TrialRecord) -> Result<(), ReportError>;
}

impl<S: ReportSink + ?Sized> ReportSink for Box<S> {
    fn record(&mut self, record: &TrialRecord) -> Result<(), ReportError> {
        (**self).record(record)
    }
}

impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn record(&mut self, record: &TrialRecord) -> Result<(), ReportError> {
        (**self).record(record)
    }
}

/// Sink keeping every record in memory
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    records: Vec<TrialRecord>,
}

impl MemorySink {
    /// Empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Records received so far, in arrival order
    pub fn records(&self) -> &[TrialRecord] {
        &self.records
    }

    /// Take ownership of the collected records
    pub fn into_records(self) -> Vec<TrialRecord> {
        self.records
    }
}

impl ReportSink for MemorySink {
    fn record(&mut self, record: &TrialRecord) -> Result<(), ReportError> {
        self.records.push(record.clone());
        Ok(())
    }
}

/// Report format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain-text blocks
    #[default]
    Text,
    /// JSON Lines
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "human" => Ok(OutputFormat::Text),
            "json" | "jsonl" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}
