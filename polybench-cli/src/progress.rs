//! Operator progress output
//!
//! One bar per sweep step, with trial notices printed above it. When the
//! terminal cannot draw a bar the notices still go to stdout.

use indicatif::{ProgressBar, ProgressStyle};

/// Printed once Horner's evaluation of a trial returns
pub const NOTICE_HORNER: &str = "Horner's algorithm finished";
/// Printed once the naive evaluation of a trial returns
pub const NOTICE_NAIVE: &str = "Polynomial evaluation finished";
/// Printed once the sink accepted a trial
pub const NOTICE_OUTPUT: &str = "Generated output";

/// Progress display for the trials of one sweep step
pub struct TrialProgress {
    bar: ProgressBar,
    echo: bool,
}

impl TrialProgress {
    /// Visible progress for `trials` trials at `degree`
    pub fn console(trials: usize, degree: usize) -> Self {
        let bar = ProgressBar::new(trials as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        bar.set_message(format!("degree {}", degree));
        Self { bar, echo: true }
    }

    /// No output at all
    pub fn quiet() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            echo: false,
        }
    }

    /// Print a trial notice
    pub fn notice(&self, message: &str) {
        if !self.echo {
            return;
        }
        if self.bar.is_hidden() {
            println!("{}", message);
        } else {
            self.bar.println(message);
        }
    }

    /// Mark one trial as done
    pub fn trial_done(&self) {
        self.bar.inc(1);
    }

    /// Trials completed so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Close the bar
    pub fn finish(&self) {
        self.bar.finish_with_message("Complete");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_counts_trials() {
        let progress = TrialProgress::quiet();
        progress.notice(NOTICE_HORNER);
        progress.trial_done();
        progress.trial_done();
        assert_eq!(progress.position(), 2);
        progress.finish();
    }
}
