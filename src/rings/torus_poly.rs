use crate::math::{Torus32, approx_phase, uniform_torus_coefficients};
use rand::Rng;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A polynomial in `T[X] / (X^N + 1)` over the 32-bit torus.
///
/// Every coefficient operation wraps modulo `2^32`, which is the torus
/// addition modulo 1.
///
/// # Invariants
/// - `N` is a power of two whenever the polynomial comes from a
///   [`TLweParams`](crate::TLweParams) value
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TorusPolynomial<const N: usize> {
    coeffs: [Torus32; N],
}

// ─── Constructors ─────────────────────────────────────────────────────────────

impl<const N: usize> TorusPolynomial<N> {
    pub fn zero() -> Self {
        Self { coeffs: [0; N] }
    }

    pub fn new(coeffs: [Torus32; N]) -> Self {
        Self { coeffs }
    }

    /// The constant polynomial `mu · X^0`.
    pub fn constant(mu: Torus32) -> Self {
        let mut poly = Self::zero();
        if N > 0 {
            poly.coeffs[0] = mu;
        }
        poly
    }

    /// Samples every coefficient uniformly over the torus.
    pub fn uniform<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            coeffs: uniform_torus_coefficients::<N, _>(rng),
        }
    }
}

// ─── Accessors ────────────────────────────────────────────────────────────────

impl<const N: usize> TorusPolynomial<N> {
    pub fn coeffs(&self) -> &[Torus32; N] {
        &self.coeffs
    }

    pub fn coeffs_mut(&mut self) -> &mut [Torus32; N] {
        &mut self.coeffs
    }
}

// ─── Arithmetic ───────────────────────────────────────────────────────────────

impl<const N: usize> TorusPolynomial<N> {
    pub fn clear(&mut self) {
        self.coeffs = [0; N];
    }

    pub fn copy_from(&mut self, other: &Self) {
        self.coeffs = other.coeffs;
    }

    /// Overwrites every coefficient with a fresh uniform torus sample.
    pub fn fill_uniform<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.coeffs = uniform_torus_coefficients::<N, _>(rng);
    }

    /// `self += p · other`
    pub fn add_mul_z_assign(&mut self, p: i32, other: &Self) {
        for (a, &b) in self.coeffs.iter_mut().zip(other.coeffs.iter()) {
            *a = a.wrapping_add(p.wrapping_mul(b));
        }
    }

    /// `self -= p · other`
    pub fn sub_mul_z_assign(&mut self, p: i32, other: &Self) {
        for (a, &b) in self.coeffs.iter_mut().zip(other.coeffs.iter()) {
            *a = a.wrapping_sub(p.wrapping_mul(b));
        }
    }

    /// `self ← X^ai · source`
    ///
    /// The exponent is reduced modulo `2N`, since `X^{2N} = 1` in the
    /// negacyclic ring.
    pub fn mul_by_xai(&mut self, ai: i32, source: &Self) {
        let a = monomial_exponent::<N>(ai);
        for (i, out) in self.coeffs.iter_mut().enumerate() {
            *out = rotated_coeff(&source.coeffs, a, i);
        }
    }

    /// `self ← (X^ai - 1) · source`
    pub fn mul_by_xai_minus_one(&mut self, ai: i32, source: &Self) {
        let a = monomial_exponent::<N>(ai);
        for (i, out) in self.coeffs.iter_mut().enumerate() {
            *out = rotated_coeff(&source.coeffs, a, i).wrapping_sub(source.coeffs[i]);
        }
    }

    /// Rounds every coefficient to the nearest multiple of `1 / msize`.
    ///
    /// # Panics
    ///
    /// Panics if `msize < 2`.
    pub fn approx_phase(&self, msize: u32) -> Self {
        let mut rounded = self.clone();
        rounded.approx_phase_assign(msize);
        rounded
    }

    /// In-place variant of [`Self::approx_phase`].
    pub fn approx_phase_assign(&mut self, msize: u32) {
        for c in self.coeffs.iter_mut() {
            *c = approx_phase(*c, msize);
        }
    }
}

fn monomial_exponent<const N: usize>(ai: i32) -> usize {
    (ai as i64).rem_euclid(2 * N as i64) as usize
}

// Coefficient `i` of `X^a · source` for `a` in `[0, 2N)`.
fn rotated_coeff<const N: usize>(source: &[Torus32; N], a: usize, i: usize) -> Torus32 {
    if a < N {
        if i < a {
            source[i + N - a].wrapping_neg()
        } else {
            source[i - a]
        }
    } else {
        let a = a - N;
        if i < a {
            source[i + N - a]
        } else {
            source[i - a].wrapping_neg()
        }
    }
}

impl<const N: usize> Default for TorusPolynomial<N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize> From<[Torus32; N]> for TorusPolynomial<N> {
    fn from(coeffs: [Torus32; N]) -> Self {
        Self::new(coeffs)
    }
}

impl<const N: usize> AddAssign<&TorusPolynomial<N>> for TorusPolynomial<N> {
    fn add_assign(&mut self, rhs: &TorusPolynomial<N>) {
        for (a, &b) in self.coeffs.iter_mut().zip(rhs.coeffs.iter()) {
            *a = a.wrapping_add(b);
        }
    }
}

impl<const N: usize> SubAssign<&TorusPolynomial<N>> for TorusPolynomial<N> {
    fn sub_assign(&mut self, rhs: &TorusPolynomial<N>) {
        for (a, &b) in self.coeffs.iter_mut().zip(rhs.coeffs.iter()) {
            *a = a.wrapping_sub(b);
        }
    }
}

impl<const N: usize> Add for TorusPolynomial<N> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += &rhs;
        self
    }
}

impl<const N: usize> Sub for TorusPolynomial<N> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= &rhs;
        self
    }
}

impl<const N: usize> Neg for TorusPolynomial<N> {
    type Output = Self;

    fn neg(mut self) -> Self {
        for c in self.coeffs.iter_mut() {
            *c = c.wrapping_neg();
        }
        self
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
