#![warn(missing_docs)]
//! PolyBench CLI Library
//!
//! This module provides the command-line harness around the evaluators:
//! configuration, degree input, the timing harness and the sweep driver.
//! Use `polybench::run()` (or `polybench_cli::run()`) in a main function to get
//! the full PolyBench CLI experience.
//!
//! # Example
//!
//! ```ignore
//! fn main() -> anyhow::Result<()> {
//!     polybench_cli::run()
//! }
//! ```

mod config;
mod harness;
mod input;
mod metadata;
mod progress;
mod sweep;

pub use config::*;
pub use harness::TimingHarness;
pub use input::{
    ConsolePrompt, DEGREE_PROMPT, DegreeSource, InputError, PresetDegrees, parse_degree,
    parse_degree_list,
};
pub use metadata::build_run_meta;
pub use progress::{NOTICE_HORNER, NOTICE_NAIVE, NOTICE_OUTPUT, TrialProgress};
pub use sweep::{ProgressMode, SweepDriver, SweepPlan, SweepState, SweepSummary};

use anyhow::Context;
use clap::{Parser, Subcommand};
use polybench_core::{Evaluator, UniformSource, run_self_test, time_seed};
use polybench_report::{JsonLinesSink, OutputFormat, ReportSink, TextSink};
use std::path::PathBuf;
use tracing::info;

/// PolyBench CLI arguments
#[derive(Parser, Debug)]
#[command(name = "polybench")]
#[command(
    author,
    version,
    about = "PolyBench - Horner's method vs. naive polynomial evaluation"
)]
pub struct Cli {
    /// Optional subcommand (Run, SelfTest, Init); defaults to Run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file (discovered from the current directory if not specified)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Comma-separated degrees to use instead of prompting, e.g. 10,1000,100000
    #[arg(long)]
    pub degrees: Option<String>,

    /// Number of degrees to request
    #[arg(long)]
    pub steps: Option<usize>,

    /// Trials per degree
    #[arg(long)]
    pub trials: Option<usize>,

    /// Largest degree still timed with the naive evaluator
    #[arg(long)]
    pub naive_cutoff: Option<usize>,

    /// Fixed RNG seed (time-based if not specified)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Report file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report format: text, json
    #[arg(long)]
    pub format: Option<String>,

    /// Suppress the progress bar and trial notices
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the benchmark sweep (default)
    Run,
    /// Check the evaluators and the generator, then exit
    SelfTest,
    /// Print a default polybench.toml
    Init,
}

/// Everything a sweep needs, after layering defaults, polybench.toml and CLI flags
#[derive(Debug, Clone)]
pub struct RunSettings {
    /// Steps and trials
    pub plan: SweepPlan,
    /// Largest degree timed with the naive evaluator
    pub naive_cutoff: usize,
    /// Preset degrees; `None` prompts on the console
    pub degrees: Option<Vec<usize>>,
    /// Fixed seed; `None` seeds from the clock
    pub seed: Option<u64>,
    /// Inclusive lower sampling bound
    pub low: f64,
    /// Exclusive upper sampling bound
    pub high: f64,
    /// Report file
    pub output: PathBuf,
    /// Report format
    pub format: OutputFormat,
    /// Operator progress display
    pub progress: ProgressMode,
}

impl RunSettings {
    /// Layer: polybench.toml defaults → CLI overrides.
    ///
    /// A preset degree list sets the step count unless `--steps` is given.
    pub fn resolve(cli: &Cli, config: &PolyConfig) -> anyhow::Result<Self> {
        let degrees = match cli.degrees.as_deref() {
            Some(list) => Some(parse_degree_list(list).context("parsing --degrees")?),
            None => config.sweep.degrees.clone(),
        };

        let steps = cli
            .steps
            .or_else(|| degrees.as_ref().map(Vec::len))
            .unwrap_or(config.sweep.steps);
        let trials = cli.trials.unwrap_or(config.sweep.trials);

        let format_str = cli.format.as_deref().unwrap_or(&config.output.format);
        let format: OutputFormat = format_str.parse().map_err(|e: String| anyhow::anyhow!(e))?;

        Ok(Self {
            plan: SweepPlan { steps, trials },
            naive_cutoff: cli.naive_cutoff.unwrap_or(config.sweep.naive_cutoff),
            degrees,
            seed: cli.seed.or(config.generator.seed),
            low: config.generator.low,
            high: config.generator.high,
            output: cli
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(&config.output.path)),
            format,
            progress: if cli.quiet {
                ProgressMode::Quiet
            } else {
                ProgressMode::Console
            },
        })
    }

    /// Seeded generator over the configured range
    pub fn generator(&self) -> anyhow::Result<UniformSource> {
        let seed = self.seed.unwrap_or_else(time_seed);
        UniformSource::with_range(seed, self.low, self.high).context("building input generator")
    }
}

/// Run the PolyBench CLI with the given arguments.
/// This is the main entry point for the binary.
///
/// # Returns
/// Returns `Ok(())` on success, or an error if something goes wrong.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the PolyBench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    // Initialize logging
    let filter = if cli.verbose {
        "polybench=debug"
    } else {
        "polybench=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();

    // Explicit --config must load; otherwise discover polybench.toml
    let config = match cli.config {
        Some(ref path) => PolyConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => PolyConfig::discover().unwrap_or_default(),
    };

    match cli.command {
        Some(Commands::Init) => {
            print!("{}", PolyConfig::default_toml());
        }
        Some(Commands::SelfTest) => {
            let settings = RunSettings::resolve(&cli, &config)?;
            let mut generator = settings.generator()?;
            run_self_test(&mut generator).context("self-test failed")?;
            println!("Self-test passed (seed {}).", generator.seed());
        }
        Some(Commands::Run) | None => {
            let settings = RunSettings::resolve(&cli, &config)?;
            run_sweep(&settings)?;
            println!("Report written to: {}", settings.output.display());
        }
    }

    Ok(())
}

/// Self-test, truncate the report, then sweep with Horner vs. naive.
pub fn run_sweep(settings: &RunSettings) -> anyhow::Result<SweepSummary> {
    run_sweep_with(settings, TimingHarness::new(settings.naive_cutoff))
}

/// [`run_sweep`] over the evaluators in `harness`.
///
/// A failing self-test returns before the report file is touched. The
/// harness's cutoff takes precedence over `settings.naive_cutoff`.
pub fn run_sweep_with<H: Evaluator, N: Evaluator>(
    settings: &RunSettings,
    harness: TimingHarness<H, N>,
) -> anyhow::Result<SweepSummary> {
    let mut generator = settings.generator()?;
    info!(
        seed = generator.seed(),
        low = settings.low,
        high = settings.high,
        "input generator seeded"
    );

    harness
        .self_test(&mut generator)
        .context("self-test failed")?;

    let meta = build_run_meta(generator.seed(), harness.naive_cutoff());
    info!(
        version = %meta.version,
        os = %meta.system.os,
        cpu = %meta.system.cpu,
        steps = settings.plan.steps,
        trials = settings.plan.trials,
        naive_cutoff = harness.naive_cutoff(),
        "starting sweep"
    );

    let sink: Box<dyn ReportSink> = match settings.format {
        OutputFormat::Text => Box::new(
            TextSink::create(&settings.output)
                .with_context(|| format!("creating {}", settings.output.display()))?,
        ),
        OutputFormat::Json => Box::new(
            JsonLinesSink::create(&settings.output, &meta)
                .with_context(|| format!("creating {}", settings.output.display()))?,
        ),
    };

    let degrees: Box<dyn DegreeSource> = match settings.degrees {
        Some(ref list) => Box::new(PresetDegrees::new(list.iter().copied())),
        None => Box::new(ConsolePrompt::stdio()),
    };

    SweepDriver::new(
        settings.plan,
        degrees,
        sink,
        &mut generator,
        harness,
    )
    .with_progress(settings.progress)
    .run()
}
