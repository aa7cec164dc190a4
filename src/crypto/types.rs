use super::errors::TLweResult;
use super::params::TLweParams;
use super::variance::Variance;
use crate::rings::TorusPolynomial;
use std::iter;

/// A TLWE ciphertext `(a_0, …, a_{k-1}, b)` with its noise estimate.
///
/// # Invariants
/// - `mask.len() == k` for the parameters the sample was built with
/// - `current_variance` is an upper-bound estimate, never an exact value
#[derive(Clone, Debug, PartialEq)]
pub struct TLweSample<const N: usize> {
    mask: Vec<TorusPolynomial<N>>,
    body: TorusPolynomial<N>,
    current_variance: Variance,
}

impl<const N: usize> TLweSample<N> {
    /// The all-zero sample `(0, …, 0, 0)` with variance 0.
    pub fn new(params: &TLweParams<N>) -> Self {
        Self {
            mask: vec![TorusPolynomial::zero(); params.mask_rank()],
            body: TorusPolynomial::zero(),
            current_variance: Variance::ZERO,
        }
    }

    /// Number `k` of mask polynomials.
    pub fn mask_rank(&self) -> usize {
        self.mask.len()
    }

    pub fn mask(&self) -> &[TorusPolynomial<N>] {
        &self.mask
    }

    pub fn mask_mut(&mut self) -> &mut [TorusPolynomial<N>] {
        &mut self.mask
    }

    pub fn body(&self) -> &TorusPolynomial<N> {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut TorusPolynomial<N> {
        &mut self.body
    }

    /// All `k + 1` components, masks first and body last.
    pub fn components(&self) -> impl Iterator<Item = &TorusPolynomial<N>> {
        self.mask.iter().chain(iter::once(&self.body))
    }

    pub(crate) fn components_mut(&mut self) -> impl Iterator<Item = &mut TorusPolynomial<N>> {
        self.mask.iter_mut().chain(iter::once(&mut self.body))
    }

    pub(crate) fn mask_and_body_mut(
        &mut self,
    ) -> (&mut [TorusPolynomial<N>], &mut TorusPolynomial<N>) {
        (&mut self.mask, &mut self.body)
    }

    pub fn current_variance(&self) -> f64 {
        self.current_variance.value()
    }

    pub fn variance(&self) -> Variance {
        self.current_variance
    }

    /// Installs a noise estimate computed by the caller.
    ///
    /// Meant for code that tracks noise across several operators at once,
    /// such as a blind-rotation loop around [`Self::mul_by_xai_minus_one`].
    pub fn set_variance(&mut self, variance: Variance) {
        self.current_variance = variance;
    }

    pub(crate) fn check_params(&self, params: &TLweParams<N>) -> TLweResult<()> {
        params.check_mask_rank(self.mask_rank())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sample_is_zero_with_k_plus_one_components() {
        let params = TLweParams::<8>::new(3, 0.0, 1.0).unwrap();
        let sample = TLweSample::new(&params);
        assert_eq!(sample.mask_rank(), 3);
        assert_eq!(sample.components().count(), 4);
        assert!(sample.components().all(|p| *p == TorusPolynomial::zero()));
        assert_eq!(sample.current_variance(), 0.0);
    }

    #[test]
    fn body_is_last_component() {
        let params = TLweParams::<4>::new(2, 0.0, 1.0).unwrap();
        let mut sample = TLweSample::new(&params);
        *sample.body_mut() = TorusPolynomial::constant(7);
        sample.mask_mut()[1] = TorusPolynomial::constant(5);
        let components: Vec<_> = sample.components().cloned().collect();
        assert_eq!(components[1], TorusPolynomial::constant(5));
        assert_eq!(components[2], TorusPolynomial::constant(7));
    }

    #[test]
    fn set_variance_overrides_estimate() {
        let params = TLweParams::<4>::new(1, 0.0, 1.0).unwrap();
        let mut sample = TLweSample::new(&params);
        sample.set_variance(Variance(0.25));
        assert_eq!(sample.current_variance(), 0.25);
    }
}
