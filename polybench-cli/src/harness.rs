//! Timing Harness
//!
//! Times one trial: Horner always, the naive evaluator only while the degree
//! is at or below the cutoff. Above the cutoff the naive evaluator is not
//! called at all and its duration is recorded as absent.

use crate::progress::{NOTICE_HORNER, NOTICE_NAIVE, NOTICE_OUTPUT, TrialProgress};
use polybench_core::{
    DEFAULT_NAIVE_CUTOFF, Evaluator, Horner, Naive, Polynomial, SelfTestError, UniformSource,
    run_self_test_with, time,
};
use polybench_report::{ReportError, ReportSink, TrialRecord};
use tracing::debug;

/// Wraps both evaluators with a monotonic clock
#[derive(Debug, Clone)]
pub struct TimingHarness<H = Horner, N = Naive> {
    horner: H,
    naive: N,
    naive_cutoff: usize,
}

impl TimingHarness {
    /// Horner vs. naive with the given cutoff
    pub fn new(naive_cutoff: usize) -> Self {
        Self::with_evaluators(Horner, Naive, naive_cutoff)
    }
}

impl Default for TimingHarness {
    fn default() -> Self {
        Self::new(DEFAULT_NAIVE_CUTOFF)
    }
}

impl<H: Evaluator, N: Evaluator> TimingHarness<H, N> {
    /// Harness over arbitrary evaluators
    pub fn with_evaluators(horner: H, naive: N, naive_cutoff: usize) -> Self {
        Self {
            horner,
            naive,
            naive_cutoff,
        }
    }

    /// Largest degree timed with the naive evaluator
    pub fn naive_cutoff(&self) -> usize {
        self.naive_cutoff
    }

    /// Run the start-up self-test against this harness's evaluators
    pub fn self_test(&self, source: &mut UniformSource) -> Result<(), SelfTestError> {
        run_self_test_with(&self.horner, &self.naive, source)
    }

    /// Whether a trial at `degree` runs the naive evaluator
    pub fn runs_naive(&self, degree: usize) -> bool {
        degree <= self.naive_cutoff
    }

    /// Time both evaluators on one polynomial and point
    pub fn measure(&self, polynomial: &Polynomial, x: f64, progress: &TrialProgress) -> TrialRecord {
        let degree = polynomial.degree();
        let coefficients = polynomial.coefficients();

        let (horner_value, horner_ns) = time(|| self.horner.evaluate(coefficients, x));
        progress.notice(NOTICE_HORNER);

        let naive_ns = if self.runs_naive(degree) {
            let (naive_value, naive_ns) = time(|| self.naive.evaluate(coefficients, x));
            progress.notice(NOTICE_NAIVE);
            debug!(
                degree,
                x,
                horner = horner_value.to_f64(),
                naive = naive_value.to_f64(),
                diff = (horner_value.to_f64() - naive_value.to_f64()).abs(),
                "trial evaluated"
            );
            Some(naive_ns)
        } else {
            debug!(
                degree,
                cutoff = self.naive_cutoff,
                "degree above cutoff, skipping {}",
                self.naive.name()
            );
            None
        };

        TrialRecord {
            degree,
            position: x,
            result: horner_value.hi(),
            result_lo: horner_value.lo(),
            horner_ns,
            naive_ns,
        }
    }

    /// Measure one trial and hand the record to `sink`
    pub fn run_trial<S: ReportSink + ?Sized>(
        &self,
        polynomial: &Polynomial,
        x: f64,
        sink: &mut S,
        progress: &TrialProgress,
    ) -> Result<TrialRecord, ReportError> {
        let record = self.measure(polynomial, x, progress);
        sink.record(&record)?;
        progress.notice(NOTICE_OUTPUT);
        Ok(record)
    }
}
