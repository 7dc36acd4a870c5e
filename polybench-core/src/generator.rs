//! Random Input Generator
//!
//! Draws coefficients and evaluation points uniformly from a half-open range,
//! [0.1, 1.0) by default. The generator is an explicit object seeded once;
//! callers pass it by `&mut` instead of sharing hidden global state.

use crate::polynomial::{Polynomial, PolynomialError};
use chrono::Utc;
use rand::SeedableRng;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use thiserror::Error;

/// Default lower bound (inclusive)
pub const DEFAULT_LOW: f64 = 0.1;

/// Default upper bound (exclusive)
pub const DEFAULT_HIGH: f64 = 1.0;

/// Errors from generator construction
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeneratorError {
    /// Bounds are not finite or not increasing
    #[error("invalid sampling range [{low}, {high}): bounds must be finite and low < high")]
    InvalidRange {
        /// Requested lower bound
        low: f64,
        /// Requested upper bound
        high: f64,
    },
}

/// Seeded source of uniformly distributed `f64` values
#[derive(Debug, Clone)]
pub struct UniformSource {
    rng: StdRng,
    range: Uniform<f64>,
    seed: u64,
    low: f64,
    high: f64,
}

impl UniformSource {
    /// Seed from the current UTC time in nanoseconds, using the default range
    pub fn from_time_seed() -> Self {
        Self::with_seed(time_seed())
    }

    /// Fixed seed with the default range
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            range: Uniform::new(DEFAULT_LOW, DEFAULT_HIGH),
            seed,
            low: DEFAULT_LOW,
            high: DEFAULT_HIGH,
        }
    }

    /// Fixed seed with a custom `[low, high)` range
    pub fn with_range(seed: u64, low: f64, high: f64) -> Result<Self, GeneratorError> {
        if !(low.is_finite() && high.is_finite() && low < high && (high - low).is_finite()) {
            return Err(GeneratorError::InvalidRange { low, high });
        }
        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            range: Uniform::new(low, high),
            seed,
            low,
            high,
        })
    }

    /// Seed this source was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Sampling range as `(low, high)`
    pub fn range(&self) -> (f64, f64) {
        (self.low, self.high)
    }

    /// Draw one value
    pub fn next_value(&mut self) -> f64 {
        self.range.sample(&mut self.rng)
    }

    /// Overwrite every entry with an independent draw
    pub fn fill(&mut self, values: &mut [f64]) {
        for value in values.iter_mut() {
            *value = self.next_value();
        }
    }

    /// Fresh polynomial of the given degree with random coefficients
    pub fn polynomial(&mut self, degree: usize) -> Result<Polynomial, PolynomialError> {
        let mut polynomial = Polynomial::zeroed(degree)?;
        self.fill(polynomial.coefficients_mut());
        Ok(polynomial)
    }
}

/// Seed derived from wall-clock time
pub fn time_seed() -> u64 {
    let now = Utc::now();
    now.timestamp_nanos_opt()
        .map(|ns| ns as u64)
        .unwrap_or_else(|| now.timestamp() as u64)
}
