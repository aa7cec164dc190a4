//! Noise bookkeeping for TLWE samples.
//!
//! A [`Variance`] is an upper-bound estimate of the second moment of the error
//! term carried by a sample, measured on the torus. Noise terms of distinct
//! samples are assumed independent, so linear combinations propagate as:
//!
//! - `c1 ± c2`          → `v1 + v2` (noise is not signed)
//! - `c1 ± p · c2`      → `v1 + p² · v2`
//! - `c1 + P(X) ⊗ c2`   → `v1 + ‖P‖₂² · v2`
use crate::rings::IntPolynomial;

#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Variance(pub f64);

impl Variance {
    pub const ZERO: Self = Self(0.0);

    pub fn from_standard_dev(std_dev: f64) -> Self {
        Self(std_dev * std_dev)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn standard_dev(self) -> f64 {
        self.0.sqrt()
    }

    /// Variance after adding or subtracting an independent term of variance `other`.
    pub fn accumulate(self, other: Variance) -> Self {
        Self(self.0 + other.0)
    }

    /// Variance after adding or subtracting `p` times an independent term.
    ///
    /// `p²` is formed in `f64`, so no integer overflow for large `p`.
    pub fn accumulate_scaled(self, p: i32, other: Variance) -> Self {
        let p = p as f64;
        Self(self.0 + p * p * other.0)
    }

    /// Variance after accumulating `p ⊗ term` for an integer polynomial `p`.
    pub fn accumulate_poly_scaled<const N: usize>(
        self,
        p: &IntPolynomial<N>,
        other: Variance,
    ) -> Self {
        Self(self.0 + p.norm_sq2() * other.0)
    }
}
