use super::errors::TLweResult;
use super::params::TLweParams;
use crate::rings::MulBackend;

/// Default advisory noise bounds (standard deviations on the torus).
pub const DEFAULT_ALPHA_MIN: f64 = 9e-9;
pub const DEFAULT_ALPHA_MAX: f64 = 0.012467;

pub struct TLweParamsBuilder<const N: usize> {
    mask_rank: Option<usize>,
    noise_bounds: Option<(f64, f64)>,
    backend: Option<MulBackend>,
}

impl<const N: usize> Default for TLweParamsBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> TLweParamsBuilder<N> {
    pub fn new() -> Self {
        Self {
            mask_rank: None,
            noise_bounds: None,
            backend: None,
        }
    }

    pub fn mask_rank(mut self, k: usize) -> Self {
        self.mask_rank = Some(k);
        self
    }

    pub fn noise_bounds(mut self, alpha_min: f64, alpha_max: f64) -> Self {
        self.noise_bounds = Some((alpha_min, alpha_max));
        self
    }

    pub fn backend(mut self, backend: MulBackend) -> Self {
        self.backend = Some(backend);
        self
    }

    pub fn build(self) -> TLweResult<TLweParams<N>> {
        let (alpha_min, alpha_max) = self
            .noise_bounds
            .unwrap_or((DEFAULT_ALPHA_MIN, DEFAULT_ALPHA_MAX));
        TLweParams::with_backend(
            self.mask_rank.unwrap_or(1),
            alpha_min,
            alpha_max,
            self.backend.unwrap_or_default(),
        )
    }
}
