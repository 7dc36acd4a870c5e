#![warn(missing_docs)]
//! # PolyBench
//!
//! Benchmark of Horner's method against naive power-sum polynomial evaluation.
//!
//! PolyBench times both evaluators on random polynomials:
//! - **Two Evaluators**: Horner's O(n) nested multiplication and the O(n²) power-sum
//! - **Extended Precision**: both accumulate in double-double arithmetic
//! - **Sweeps**: operator-chosen degrees × repeated trials, fresh random inputs per trial
//! - **Cutoff**: the quadratic evaluator is skipped above a configurable degree
//! - **Reports**: plain-text blocks or JSON Lines, one record per trial
//! - **Self-Test**: evaluators are checked against hand-computed values before any trial
//!
//! ## Quick Start
//!
//! ```ignore
//! use polybench::{Horner, Evaluator, UniformSource};
//!
//! let mut source = UniformSource::with_seed(42);
//! let polynomial = source.polynomial(1_000)?;
//! let value = Horner.evaluate(polynomial.coefficients(), source.next_value());
//! ```

// Re-export core types
pub use polybench_core::{
    DEFAULT_NAIVE_CUTOFF, Evaluator, Extended, Horner, MAX_DEGREE, Naive, Polynomial, PolynomialError,
    SelfTestError, Timer, UniformSource, horner, naive, power, run_self_test, run_self_test_with,
};

// Re-export report types
pub use polybench_report::{
    JsonLine, JsonLinesSink, MemorySink, OutputFormat, ReportError, ReportSink, RunMeta, TextSink,
    TrialRecord, format_readable_time, format_text_block, parse_json_lines,
};

// Re-export harness types
pub use polybench_cli::{
    Cli, Commands, DegreeSource, PolyConfig, PresetDegrees, ProgressMode, RunSettings,
    SweepDriver, SweepPlan, SweepState, SweepSummary, TimingHarness, run_sweep, run_sweep_with,
};

/// Run the PolyBench CLI harness.
///
/// Call this from the binary's `main()`:
/// ```ignore
/// fn main() -> anyhow::Result<()> {
///     polybench::run()
/// }
/// ```
pub use polybench_cli::run;
