/// A polynomial in `Z[X] / (X^N + 1)` with `i32` coefficients.
///
/// Used for secret keys (binary coefficients) and for the integer
/// multipliers of [`TLweSample::add_mul_r_to`](crate::TLweSample::add_mul_r_to).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntPolynomial<const N: usize> {
    coeffs: [i32; N],
}

impl<const N: usize> IntPolynomial<N> {
    pub fn zero() -> Self {
        Self { coeffs: [0; N] }
    }

    pub fn new(coeffs: [i32; N]) -> Self {
        Self { coeffs }
    }

    /// The monomial `X^0`, i.e. the multiplicative identity.
    pub fn one() -> Self {
        let mut coeffs = [0; N];
        if N > 0 {
            coeffs[0] = 1;
        }
        Self { coeffs }
    }

    pub fn coeffs(&self) -> &[i32; N] {
        &self.coeffs
    }

    pub fn coeffs_mut(&mut self) -> &mut [i32; N] {
        &mut self.coeffs
    }

    /// Squared Euclidean norm `‖p‖₂²` of the coefficient vector.
    ///
    /// Accumulated in `f64` so large coefficients never overflow.
    pub fn norm_sq2(&self) -> f64 {
        self.coeffs.iter().map(|&c| (c as f64) * (c as f64)).sum()
    }
}

impl<const N: usize> Default for IntPolynomial<N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize> From<[i32; N]> for IntPolynomial<N> {
    fn from(coeffs: [i32; N]) -> Self {
        Self::new(coeffs)
    }
}
