//! Polynomial coefficient storage

use crate::eval::{horner, naive};
use crate::extended::Extended;
use thiserror::Error;

/// Errors from polynomial construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolynomialError {
    /// No coefficients given
    #[error("a polynomial needs at least one coefficient")]
    Empty,

    /// Coefficient storage for the degree cannot be allocated
    #[error("degree {degree} needs more coefficients than can be allocated")]
    TooLarge {
        /// Requested degree
        degree: usize,
    },
}

/// Largest degree whose `degree + 1` coefficients fit in one allocation
pub const MAX_DEGREE: usize = isize::MAX as usize / std::mem::size_of::<f64>() - 1;

/// Dense polynomial with coefficients ordered highest-degree first.
///
/// Always holds `degree + 1` coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Build from coefficients ordered highest-degree first
    pub fn from_coefficients(coefficients: Vec<f64>) -> Result<Self, PolynomialError> {
        if coefficients.is_empty() {
            return Err(PolynomialError::Empty);
        }
        Ok(Self { coefficients })
    }

    /// All-zero polynomial of the given degree
    pub fn zeroed(degree: usize) -> Result<Self, PolynomialError> {
        let len = degree
            .checked_add(1)
            .filter(|_| degree <= MAX_DEGREE)
            .ok_or(PolynomialError::TooLarge { degree })?;

        let mut coefficients = Vec::new();
        coefficients
            .try_reserve_exact(len)
            .map_err(|_| PolynomialError::TooLarge { degree })?;
        coefficients.resize(len, 0.0);
        Ok(Self { coefficients })
    }

    /// Highest exponent
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Coefficients, leading term first
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Mutable view of the coefficients; the length cannot change
    pub fn coefficients_mut(&mut self) -> &mut [f64] {
        &mut self.coefficients
    }

    /// Evaluate with Horner's method
    pub fn horner(&self, x: f64) -> Extended {
        horner(&self.coefficients, x)
    }

    /// Evaluate with the power-sum method
    pub fn naive(&self, x: f64) -> Extended {
        naive(&self.coefficients, x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_matches_length() {
        let p = Polynomial::from_coefficients(vec![2.0, 1.0, 1.0]).unwrap();
        assert_eq!(p.degree(), 2);
        assert_eq!(p.coefficients().len(), p.degree() + 1);
    }

    #[test]
    fn test_zeroed() {
        let mut p = Polynomial::zeroed(0).unwrap();
        assert_eq!(p.coefficients(), &[0.0]);
        p.coefficients_mut()[0] = 5.0;
        assert_eq!(p.horner(123.0).to_f64(), 5.0);
    }

    #[test]
    fn test_oversized_degree_rejected() {
        for degree in [usize::MAX, MAX_DEGREE + 1, 1 << 60] {
            assert_eq!(
                Polynomial::zeroed(degree),
                Err(PolynomialError::TooLarge { degree })
            );
        }
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(
            Polynomial::from_coefficients(Vec::new()),
            Err(PolynomialError::Empty)
        );
    }

    #[test]
    fn test_methods_delegate() {
        let p = Polynomial::from_coefficients(vec![3.0, 2.0, -1.0, 1.0]).unwrap();
        assert_eq!(p.horner(0.5).to_f64(), 1.375);
        assert_eq!(p.naive(0.5).to_f64(), 1.375);
    }
}
