//! Start-up Self-Test
//!
//! Checks both evaluators against hand-computed values and the generator
//! against repeated output. Any failure must stop the run before a single
//! trial is recorded.

use crate::eval::{Evaluator, Horner, Naive};
use crate::generator::UniformSource;
use thiserror::Error;

/// Relative tolerance for checks that are not exact in binary floating point
pub const SELF_TEST_TOLERANCE: f64 = 1e-6;

/// Errors reported by [`run_self_test`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelfTestError {
    /// An evaluator disagreed with a hand-computed value
    #[error("{evaluator} evaluated {case} to {actual}, expected {expected}")]
    Mismatch {
        /// Evaluator name
        evaluator: &'static str,
        /// Polynomial and point
        case: &'static str,
        /// Hand-computed value
        expected: f64,
        /// Value returned
        actual: f64,
    },

    /// Two consecutive draws were bit-identical
    #[error("random generator produced {0} twice in a row")]
    RepeatedDraw(f64),
}

/// How strictly a check compares
#[derive(Debug, Clone, Copy)]
enum Expect {
    Exact(f64),
    Near(f64),
}

struct Check {
    case: &'static str,
    coefficients: &'static [f64],
    x: f64,
    expect: Expect,
}

const CHECKS: &[Check] = &[
    Check {
        case: "2x^2 + x + 1 at x = 1",
        coefficients: &[2.0, 1.0, 1.0],
        x: 1.0,
        expect: Expect::Exact(4.0),
    },
    Check {
        case: "2x^2 + x + 1 at x = 0.1",
        coefficients: &[2.0, 1.0, 1.0],
        x: 0.1,
        expect: Expect::Near(1.12),
    },
    Check {
        case: "3x^3 + 2x^2 - x + 1 at x = 0.5",
        coefficients: &[3.0, 2.0, -1.0, 1.0],
        x: 0.5,
        expect: Expect::Exact(1.375),
    },
];

fn check_evaluator(evaluator: &dyn Evaluator) -> Result<(), SelfTestError> {
    for check in CHECKS {
        let actual = evaluator.evaluate(check.coefficients, check.x).to_f64();
        let (expected, ok) = match check.expect {
            Expect::Exact(v) => (v, actual == v),
            Expect::Near(v) => (v, (actual - v).abs() < v.abs() * SELF_TEST_TOLERANCE),
        };
        if !ok {
            return Err(SelfTestError::Mismatch {
                evaluator: evaluator.name(),
                case: check.case,
                expected,
                actual,
            });
        }
    }
    Ok(())
}

/// Validate evaluator correctness and generator sanity.
///
/// Consumes two draws from `source`.
pub fn run_self_test(source: &mut UniformSource) -> Result<(), SelfTestError> {
    run_self_test_with(&Horner, &Naive, source)
}

/// [`run_self_test`] over caller-supplied evaluators
pub fn run_self_test_with(
    horner: &dyn Evaluator,
    naive: &dyn Evaluator,
    source: &mut UniformSource,
) -> Result<(), SelfTestError> {
    check_evaluator(horner)?;
    check_evaluator(naive)?;

    let first = source.next_value();
    let second = source.next_value();
    if first.to_bits() == second.to_bits() {
        return Err(SelfTestError::RepeatedDraw(first));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extended::Extended;

    /// Evaluator that is off by one everywhere
    struct OffByOne;

    impl Evaluator for OffByOne {
        fn name(&self) -> &'static str {
            "off-by-one"
        }

        fn evaluate(&self, coefficients: &[f64], x: f64) -> Extended {
            Horner.evaluate(coefficients, x) + 1.0
        }
    }

    #[test]
    fn test_self_test_passes() {
        let mut source = UniformSource::with_seed(2024);
        assert_eq!(run_self_test(&mut source), Ok(()));
    }

    #[test]
    fn test_broken_evaluator_reported() {
        let err = check_evaluator(&OffByOne).unwrap_err();
        match err {
            SelfTestError::Mismatch {
                evaluator,
                expected,
                actual,
                ..
            } => {
                assert_eq!(evaluator, "off-by-one");
                assert_eq!(expected, 4.0);
                assert_eq!(actual, 5.0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_broken_naive_fails_whole_self_test() {
        let mut source = UniformSource::with_seed(2024);
        let err = run_self_test_with(&Horner, &OffByOne, &mut source).unwrap_err();
        assert!(matches!(
            err,
            SelfTestError::Mismatch { evaluator: "off-by-one", .. }
        ));
    }

    #[test]
    fn test_error_message() {
        let err = SelfTestError::RepeatedDraw(0.5);
        assert_eq!(
            err.to_string(),
            "random generator produced 0.5 twice in a row"
        );
    }
}
