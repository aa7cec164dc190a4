//! TLWE secret key: `k` polynomials with uniform binary coefficients.
use crate::crypto::{TLweError, TLweParams, TLweResult};
use crate::math::binary_coefficients;
use crate::rings::IntPolynomial;
use rand::{CryptoRng, Rng};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct TLweKey<const N: usize> {
    params: Arc<TLweParams<N>>,
    key: Vec<IntPolynomial<N>>,
}

impl<const N: usize> TLweKey<N> {
    /// Generates a key with `N · k` independent unbiased bits.
    pub fn generate<R: Rng + CryptoRng + ?Sized>(
        params: Arc<TLweParams<N>>,
        rng: &mut R,
    ) -> Self {
        let key = (0..params.mask_rank())
            .map(|_| IntPolynomial::new(binary_coefficients::<N, _>(rng)))
            .collect();
        tracing::debug!(
            degree = N,
            mask_rank = params.mask_rank(),
            "generated TLWE key"
        );
        Self { params, key }
    }

    /// Builds a key from explicit polynomials, checking their count and that
    /// every coefficient is 0 or 1.
    pub fn from_polynomials(
        params: Arc<TLweParams<N>>,
        key: Vec<IntPolynomial<N>>,
    ) -> TLweResult<Self> {
        params.check_mask_rank(key.len())?;
        for (polynomial, poly) in key.iter().enumerate() {
            if let Some((index, &value)) = poly
                .coeffs()
                .iter()
                .enumerate()
                .find(|&(_, &c)| c != 0 && c != 1)
            {
                return Err(TLweError::NonBinaryKey {
                    polynomial,
                    index,
                    value,
                });
            }
        }
        Ok(Self { params, key })
    }

    pub fn params(&self) -> &TLweParams<N> {
        &self.params
    }

    pub fn polynomials(&self) -> &[IntPolynomial<N>] {
        &self.key
    }
}
