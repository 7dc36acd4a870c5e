//! Report Data Structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Measurements of one trial.
///
/// Built once by the timing harness and handed to a sink; never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialRecord {
    /// Polynomial degree
    pub degree: usize,
    /// Evaluation point
    pub position: f64,
    /// Value computed by Horner's method, rounded to `f64`
    pub result: f64,
    /// Trailing part of the extended-precision value; the unevaluated sum
    /// `result + result_lo` carries the full precision
    #[serde(default)]
    pub result_lo: f64,
    /// Horner evaluation time in nanoseconds
    pub horner_ns: u64,
    /// Naive evaluation time in nanoseconds, `None` when the degree was above the cutoff
    pub naive_ns: Option<u64>,
}

impl TrialRecord {
    /// Naive duration with the skipped case rendered as zero
    pub fn naive_ns_or_zero(&self) -> u64 {
        self.naive_ns.unwrap_or(0)
    }

    /// Whether the naive evaluator was skipped
    pub fn naive_skipped(&self) -> bool {
        self.naive_ns.is_none()
    }
}

/// Run metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMeta {
    /// PolyBench version
    pub version: String,
    /// When the run started
    pub timestamp: DateTime<Utc>,
    /// Generator seed, enough to replay the inputs
    pub seed: u64,
    /// Largest degree timed with the naive evaluator
    pub naive_cutoff: usize,
    /// Host the run was measured on
    pub system: SystemInfo,
}

/// System information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    /// Operating system
    pub os: String,
    /// CPU architecture
    pub arch: String,
    /// CPU model name
    pub cpu: String,
    /// Logical cores available
    pub cpu_cores: u32,
}
