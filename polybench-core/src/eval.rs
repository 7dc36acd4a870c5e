//! Polynomial Evaluators
//!
//! Coefficients are ordered highest-degree first: `c[0]` multiplies
//! `x^degree`, `c[degree]` is the constant term.
//!
//! Two evaluators are provided for contrast:
//! - [`horner`]: one pass of nested multiplication, O(n)
//! - [`naive`]: independent exponentiation per term, O(n²)
//!
//! Both accumulate in [`Extended`] precision.

use crate::extended::Extended;

/// A polynomial evaluation strategy
pub trait Evaluator {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Evaluate `coefficients` (highest-degree first) at `x`
    fn evaluate(&self, coefficients: &[f64], x: f64) -> Extended;
}

/// Horner's method
#[derive(Debug, Clone, Copy, Default)]
pub struct Horner;

/// Power-sum method with per-term exponentiation
#[derive(Debug, Clone, Copy, Default)]
pub struct Naive;

impl Evaluator for Horner {
    fn name(&self) -> &'static str {
        "horner"
    }

    #[inline]
    fn evaluate(&self, coefficients: &[f64], x: f64) -> Extended {
        horner(coefficients, x)
    }
}

impl Evaluator for Naive {
    fn name(&self) -> &'static str {
        "naive"
    }

    #[inline]
    fn evaluate(&self, coefficients: &[f64], x: f64) -> Extended {
        naive(coefficients, x)
    }
}

/// Evaluate via Horner's recurrence `v0 = c0; vi = ci + v(i-1) * x`.
///
/// An empty slice evaluates to zero.
pub fn horner(coefficients: &[f64], x: f64) -> Extended {
    let Some((&first, rest)) = coefficients.split_first() else {
        return Extended::ZERO;
    };

    rest.iter()
        .fold(Extended::from_f64(first), |value, &c| value * x + c)
}

/// Raise `x` to `exponent` by repeated multiplication.
///
/// `power(x, 0)` is one for every `x`, zero included.
pub fn power(x: f64, exponent: usize) -> Extended {
    if exponent == 0 {
        return Extended::ONE;
    }

    let mut value = Extended::from_f64(x);
    for _ in 1..exponent {
        value = value * x;
    }
    value
}

/// Evaluate as `Σ c[i] * x^(degree - i)`, computing every power from scratch.
///
/// Quadratic in the degree on purpose; this is the baseline Horner is
/// measured against. An empty slice evaluates to zero.
pub fn naive(coefficients: &[f64], x: f64) -> Extended {
    let Some(degree) = coefficients.len().checked_sub(1) else {
        return Extended::ZERO;
    };

    // Constant term first, then climb towards the leading coefficient
    let mut value = Extended::from_f64(coefficients[degree]);
    for (exponent, &c) in coefficients[..degree].iter().rev().enumerate() {
        value = power(x, exponent + 1) * c + value;
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUADRATIC: [f64; 3] = [2.0, 1.0, 1.0]; // 2x^2 + x + 1
    const CUBIC: [f64; 4] = [3.0, 2.0, -1.0, 1.0]; // 3x^3 + 2x^2 - x + 1

    fn relative_diff(actual: f64, expected: f64) -> f64 {
        (actual - expected).abs() / expected.abs()
    }

    #[test]
    fn test_quadratic_at_one() {
        assert_eq!(horner(&QUADRATIC, 1.0).to_f64(), 4.0);
        assert_eq!(naive(&QUADRATIC, 1.0).to_f64(), 4.0);
    }

    #[test]
    fn test_quadratic_at_tenth() {
        assert!(relative_diff(horner(&QUADRATIC, 0.1).to_f64(), 1.12) < 1e-6);
        assert!(relative_diff(naive(&QUADRATIC, 0.1).to_f64(), 1.12) < 1e-6);
    }

    #[test]
    fn test_cubic_at_half_is_exact() {
        assert_eq!(horner(&CUBIC, 0.5).to_f64(), 1.375);
        assert_eq!(naive(&CUBIC, 0.5).to_f64(), 1.375);
    }

    #[test]
    fn test_degree_zero_returns_constant() {
        for x in [0.0, 0.5, -3.0, 1e9] {
            assert_eq!(horner(&[0.42], x).to_f64(), 0.42);
            assert_eq!(naive(&[0.42], x).to_f64(), 0.42);
        }
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(horner(&[], 2.0), Extended::ZERO);
        assert_eq!(naive(&[], 2.0), Extended::ZERO);
    }

    #[test]
    fn test_power_zero_exponent() {
        assert_eq!(power(0.0, 0), Extended::ONE);
        assert_eq!(power(7.5, 0), Extended::ONE);
        assert_eq!(power(-1.0, 0), Extended::ONE);
    }

    #[test]
    fn test_power_small_exponents() {
        assert_eq!(power(2.0, 1).to_f64(), 2.0);
        assert_eq!(power(2.0, 10).to_f64(), 1024.0);
        assert_eq!(power(0.5, 3).to_f64(), 0.125);
        assert_eq!(power(0.0, 4).to_f64(), 0.0);
    }

    #[test]
    fn test_evaluators_agree_on_long_polynomial() {
        // Deterministic pseudo-random coefficients in [0.1, 1.0)
        let coefficients: Vec<f64> = (0..2_000)
            .map(|i| 0.1 + 0.9 * ((i * 7919 % 1000) as f64 / 1000.0))
            .collect();

        for x in [0.1, 0.5, 0.99] {
            let h = Horner.evaluate(&coefficients, x).to_f64();
            let n = Naive.evaluate(&coefficients, x).to_f64();
            let tolerance = 1e-12 * h.abs().max(1.0);
            assert!(
                (h - n).abs() <= tolerance,
                "x={x}: horner={h} naive={n}"
            );
        }
    }

    #[test]
    fn test_evaluator_names() {
        assert_eq!(Horner.name(), "horner");
        assert_eq!(Naive.name(), "naive");
    }
}
