//! Extended-Precision Accumulation
//!
//! A double-double value: an unevaluated sum `hi + lo` of two `f64`s with
//! `|lo| <= ulp(hi) / 2`. Gives roughly 106 bits of significand using only
//! error-free transformations, which is enough to keep rounding drift out of
//! long Horner chains and power-sum accumulations.

use std::fmt;
use std::ops::{Add, Mul};

/// Double-double accumulator used by both evaluators
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Extended {
    hi: f64,
    lo: f64,
}

/// `a + b` as a rounded sum and its exact rounding error
#[inline(always)]
fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let bb = s - a;
    let err = (a - (s - bb)) + (b - bb);
    (s, err)
}

/// Same as [`two_sum`] but requires `|a| >= |b|`
#[inline(always)]
fn quick_two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let err = b - (s - a);
    (s, err)
}

/// `a * b` as a rounded product and its exact rounding error (via FMA)
#[inline(always)]
fn two_prod(a: f64, b: f64) -> (f64, f64) {
    let p = a * b;
    let err = a.mul_add(b, -p);
    (p, err)
}

impl Extended {
    /// Additive identity
    pub const ZERO: Self = Self { hi: 0.0, lo: 0.0 };
    /// Multiplicative identity
    pub const ONE: Self = Self { hi: 1.0, lo: 0.0 };

    /// Lift an `f64` exactly
    #[inline]
    pub const fn from_f64(value: f64) -> Self {
        Self { hi: value, lo: 0.0 }
    }

    /// Round to the nearest `f64`
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.hi + self.lo
    }

    /// Leading component
    #[inline]
    pub fn hi(self) -> f64 {
        self.hi
    }

    /// Trailing (error) component
    #[inline]
    pub fn lo(self) -> f64 {
        self.lo
    }

    #[inline(always)]
    fn normalize(hi: f64, lo: f64) -> Self {
        let (hi, lo) = quick_two_sum(hi, lo);
        Self { hi, lo }
    }

    /// `self * rhs` for a plain `f64` factor
    #[inline]
    pub fn mul_f64(self, rhs: f64) -> Self {
        let (p, e) = two_prod(self.hi, rhs);
        Self::normalize(p, e + self.lo * rhs)
    }

    /// `self + rhs` for a plain `f64` term
    #[inline]
    pub fn add_f64(self, rhs: f64) -> Self {
        let (s, e) = two_sum(self.hi, rhs);
        Self::normalize(s, e + self.lo)
    }
}

impl From<f64> for Extended {
    fn from(value: f64) -> Self {
        Self::from_f64(value)
    }
}

impl From<Extended> for f64 {
    fn from(value: Extended) -> Self {
        value.to_f64()
    }
}

impl Add for Extended {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        let (s, e) = two_sum(self.hi, rhs.hi);
        Self::normalize(s, e + self.lo + rhs.lo)
    }
}

impl Add<f64> for Extended {
    type Output = Self;

    #[inline]
    fn add(self, rhs: f64) -> Self {
        self.add_f64(rhs)
    }
}

impl Mul for Extended {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let (p, e) = two_prod(self.hi, rhs.hi);
        Self::normalize(p, e + (self.hi * rhs.lo + self.lo * rhs.hi))
    }
}

impl Mul<f64> for Extended {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        self.mul_f64(rhs)
    }
}

impl fmt::Display for Extended {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_f64(), f)
    }
}
