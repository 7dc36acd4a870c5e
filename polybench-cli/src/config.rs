//! Configuration loading from polybench.toml
//!
//! PolyBench configuration can be specified in a `polybench.toml` file in the project root.
//! The configuration is automatically discovered by walking up from the current directory.

use polybench_core::{DEFAULT_HIGH, DEFAULT_LOW, DEFAULT_NAIVE_CUTOFF};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Name of the configuration file looked up by [`PolyConfig::discover`]
pub const CONFIG_FILE_NAME: &str = "polybench.toml";

/// PolyBench configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PolyConfig {
    /// Sweep shape and cutoff
    #[serde(default)]
    pub sweep: SweepConfig,
    /// Random input generation
    #[serde(default)]
    pub generator: GeneratorConfig,
    /// Report output
    #[serde(default)]
    pub output: OutputConfig,
}

/// Sweep configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Number of degrees requested per run
    #[serde(default = "default_steps")]
    pub steps: usize,
    /// Trials per degree
    #[serde(default = "default_trials")]
    pub trials: usize,
    /// Largest degree still timed with the naive evaluator
    #[serde(default = "default_naive_cutoff")]
    pub naive_cutoff: usize,
    /// Preset degrees; when absent the operator is prompted
    #[serde(default)]
    pub degrees: Option<Vec<usize>>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            steps: default_steps(),
            trials: default_trials(),
            naive_cutoff: default_naive_cutoff(),
            degrees: None,
        }
    }
}

fn default_steps() -> usize {
    4
}
fn default_trials() -> usize {
    10
}
fn default_naive_cutoff() -> usize {
    DEFAULT_NAIVE_CUTOFF
}

/// Generator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Inclusive lower bound of coefficients and points
    #[serde(default = "default_low")]
    pub low: f64,
    /// Exclusive upper bound of coefficients and points
    #[serde(default = "default_high")]
    pub high: f64,
    /// Fixed seed; time-based when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            low: default_low(),
            high: default_high(),
            seed: None,
        }
    }
}

fn default_low() -> f64 {
    DEFAULT_LOW
}
fn default_high() -> f64 {
    DEFAULT_HIGH
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Report file, truncated at start-up
    #[serde(default = "default_path")]
    pub path: String,
    /// Report format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            format: default_format(),
        }
    }
}

fn default_path() -> String {
    "algorithm_result.txt".to_string()
}
fn default_format() -> String {
    "text".to_string()
}

impl PolyConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        Self::discover_from(&std::env::current_dir().ok()?)
    }

    /// Walk up from `start` to the first polybench.toml and load it.
    ///
    /// A file that fails to load is logged and treated as absent.
    pub fn discover_from(start: &Path) -> Option<Self> {
        let mut dir = start.to_path_buf();
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return match Self::load(&config_path) {
                    Ok(config) => Some(config),
                    Err(e) => {
                        warn!(
                            path = %config_path.display(),
                            error = %format!("{e:#}"),
                            "ignoring unreadable config, using defaults"
                        );
                        None
                    }
                };
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# PolyBench Configuration

[sweep]
# Number of degrees requested per run
steps = 4
# Trials per degree
trials = 10
# Largest degree still timed with the quadratic evaluator
naive_cutoff = 100000
# Preset degrees instead of prompting (uncomment to enable)
# degrees = [10, 1000, 100000, 1000000]

[generator]
# Coefficients and evaluation points are drawn from [low, high)
low = 0.1
high = 1.0
# Fixed seed for reproducible runs (uncomment to enable)
# seed = 42

[output]
# Report file, truncated at start-up
path = "algorithm_result.txt"
# Report format: text or json
format = "text"
"#
        .to_string()
    }
}
