#![warn(missing_docs)]
//! PolyBench Core - Evaluation Runtime
//!
//! This crate provides everything a single trial needs:
//! - Horner and power-sum polynomial evaluators behind the `Evaluator` trait
//! - Double-double `Extended` accumulation for both evaluators
//! - `UniformSource`, a seeded generator of coefficients and evaluation points
//! - Monotonic nanosecond `Timer`
//! - The start-up self-test that guards every run

mod eval;
mod extended;
mod generator;
mod measure;
mod polynomial;
mod self_test;

pub use eval::{Evaluator, Horner, Naive, horner, naive, power};
pub use extended::Extended;
pub use generator::{DEFAULT_HIGH, DEFAULT_LOW, GeneratorError, UniformSource, time_seed};
pub use measure::{Timer, time};
pub use polynomial::{MAX_DEGREE, Polynomial, PolynomialError};
pub use self_test::{SELF_TEST_TOLERANCE, SelfTestError, run_self_test, run_self_test_with};

/// Largest degree still timed with the quadratic evaluator by default
pub const DEFAULT_NAIVE_CUTOFF: usize = 100_000;
