//! Sweep Driver
//!
//! Two-level state machine over degrees and trials:
//!
//! ```text
//! AwaitDegreeInput{1} ─read─▶ RunTrials{1, d, 1} ─▶ … ─▶ RunTrials{1, d, trials}
//!        ▲                                                        │
//!        └──────────────── AwaitDegreeInput{2} ◀──────────────────┘
//!                                  …
//! RunTrials{steps, d, trials} ─▶ Done
//! ```
//!
//! Exactly `steps` degrees are read. Each one is held for exactly `trials`
//! trials, and every trial draws a fresh polynomial and point that are
//! dropped once the record has been written.

use crate::harness::TimingHarness;
use crate::input::DegreeSource;
use crate::progress::TrialProgress;
use anyhow::Context;
use polybench_core::{Evaluator, Horner, Naive, UniformSource};
use polybench_report::ReportSink;
use tracing::{debug, info};

/// Shape of a sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepPlan {
    /// Degrees requested
    pub steps: usize,
    /// Trials per degree
    pub trials: usize,
}

impl Default for SweepPlan {
    fn default() -> Self {
        Self {
            steps: 4,
            trials: 10,
        }
    }
}

/// Where the sweep currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepState {
    /// Waiting for the degree of `step` (1-based)
    AwaitDegreeInput {
        /// Sweep step
        step: usize,
    },
    /// About to run trial `trial` (1-based) of `step`
    RunTrials {
        /// Sweep step
        step: usize,
        /// Degree held for this step
        degree: usize,
        /// Trial within the step
        trial: usize,
    },
    /// All steps finished
    Done,
}

/// Counts gathered while sweeping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepSummary {
    /// Degrees in the order they were read
    pub degrees: Vec<usize>,
    /// Trials recorded
    pub trials_run: usize,
    /// Trials where the naive evaluator was skipped
    pub naive_skipped: usize,
}

/// How the driver reports progress to the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressMode {
    /// Progress bar and trial notices
    #[default]
    Console,
    /// Nothing
    Quiet,
}

/// Drives a sweep from degree input to report output
pub struct SweepDriver<'a, D, S, H = Horner, N = Naive> {
    plan: SweepPlan,
    state: SweepState,
    degrees: D,
    sink: S,
    generator: &'a mut UniformSource,
    harness: TimingHarness<H, N>,
    progress_mode: ProgressMode,
    progress: Option<TrialProgress>,
    summary: SweepSummary,
}

impl<'a, D, S, H, N> SweepDriver<'a, D, S, H, N>
where
    D: DegreeSource,
    S: ReportSink,
    H: Evaluator,
    N: Evaluator,
{
    /// New driver positioned at the first degree prompt
    pub fn new(
        plan: SweepPlan,
        degrees: D,
        sink: S,
        generator: &'a mut UniformSource,
        harness: TimingHarness<H, N>,
    ) -> Self {
        let state = if plan.steps == 0 {
            SweepState::Done
        } else {
            SweepState::AwaitDegreeInput { step: 1 }
        };
        Self {
            plan,
            state,
            degrees,
            sink,
            generator,
            harness,
            progress_mode: ProgressMode::default(),
            progress: None,
            summary: SweepSummary::default(),
        }
    }

    /// Choose how progress is shown
    pub fn with_progress(mut self, mode: ProgressMode) -> Self {
        self.progress_mode = mode;
        self
    }

    /// Current state
    pub fn state(&self) -> SweepState {
        self.state
    }

    /// Counts so far
    pub fn summary(&self) -> &SweepSummary {
        &self.summary
    }

    /// Perform one transition and return the new state
    pub fn step(&mut self) -> anyhow::Result<SweepState> {
        self.state = match self.state {
            SweepState::AwaitDegreeInput { step } => {
                let degree = self
                    .degrees
                    .next_degree(step)
                    .with_context(|| format!("reading degree for step {}", step))?;
                info!(step, degree, trials = self.plan.trials, "starting sweep step");
                self.summary.degrees.push(degree);

                if self.plan.trials == 0 {
                    self.next_step(step)
                } else {
                    self.progress = Some(match self.progress_mode {
                        ProgressMode::Console => TrialProgress::console(self.plan.trials, degree),
                        ProgressMode::Quiet => TrialProgress::quiet(),
                    });
                    SweepState::RunTrials {
                        step,
                        degree,
                        trial: 1,
                    }
                }
            }
            SweepState::RunTrials {
                step,
                degree,
                trial,
            } => {
                self.run_trial(degree, trial)?;

                if trial < self.plan.trials {
                    SweepState::RunTrials {
                        step,
                        degree,
                        trial: trial + 1,
                    }
                } else {
                    if let Some(progress) = self.progress.take() {
                        progress.finish();
                    }
                    self.next_step(step)
                }
            }
            SweepState::Done => SweepState::Done,
        };
        Ok(self.state)
    }

    /// Run every remaining transition
    pub fn run(mut self) -> anyhow::Result<SweepSummary> {
        while self.state != SweepState::Done {
            self.step()?;
        }
        info!(
            degrees = self.summary.degrees.len(),
            trials = self.summary.trials_run,
            naive_skipped = self.summary.naive_skipped,
            "sweep complete"
        );
        Ok(self.summary)
    }

    fn next_step(&self, step: usize) -> SweepState {
        if step < self.plan.steps {
            SweepState::AwaitDegreeInput { step: step + 1 }
        } else {
            SweepState::Done
        }
    }

    fn run_trial(&mut self, degree: usize, trial: usize) -> anyhow::Result<()> {
        // Owned by this trial only; dropped when the record is written
        let polynomial = self
            .generator
            .polynomial(degree)
            .with_context(|| format!("building polynomial of degree {}", degree))?;
        let x = self.generator.next_value();

        let quiet;
        let progress = match &self.progress {
            Some(progress) => progress,
            None => {
                quiet = TrialProgress::quiet();
                &quiet
            }
        };

        let record = self
            .harness
            .run_trial(&polynomial, x, &mut self.sink, progress)
            .with_context(|| format!("writing trial {} of degree {}", trial, degree))?;
        progress.trial_done();

        debug!(degree, trial, x, result = record.result, "trial recorded");
        self.summary.trials_run += 1;
        if record.naive_skipped() {
            self.summary.naive_skipped += 1;
        }
        Ok(())
    }
}
