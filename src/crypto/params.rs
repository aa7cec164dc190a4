use super::builder::TLweParamsBuilder;
use super::errors::{TLweError, TLweResult};
use crate::rings::{MulBackend, Multiplier};

/// Parameters of a TLWE instance over `T[X] / (X^N + 1)`.
///
/// Immutable once built; keys hold it behind an `Arc` and every sample
/// operator takes it by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct TLweParams<const N: usize> {
    mask_rank: usize,
    alpha_min: f64,
    alpha_max: f64,
    multiplier: Multiplier<N>,
}

impl<const N: usize> TLweParams<N> {
    pub fn builder() -> TLweParamsBuilder<N> {
        TLweParamsBuilder::new()
    }

    /// Creates parameters using the schoolbook multiplication backend.
    pub fn new(mask_rank: usize, alpha_min: f64, alpha_max: f64) -> TLweResult<Self> {
        Self::with_backend(mask_rank, alpha_min, alpha_max, MulBackend::default())
    }

    pub fn with_backend(
        mask_rank: usize,
        alpha_min: f64,
        alpha_max: f64,
        backend: MulBackend,
    ) -> TLweResult<Self> {
        if !N.is_power_of_two() {
            return Err(TLweError::InvalidDegree { degree: N });
        }
        if mask_rank == 0 {
            return Err(TLweError::InvalidMaskRank { mask_rank });
        }
        let bounds_ok = alpha_min.is_finite()
            && alpha_max.is_finite()
            && alpha_min >= 0.0
            && alpha_min <= alpha_max;
        if !bounds_ok {
            return Err(TLweError::InvalidNoiseBounds {
                alpha_min,
                alpha_max,
            });
        }
        Ok(Self {
            mask_rank,
            alpha_min,
            alpha_max,
            multiplier: Multiplier::new(backend),
        })
    }

    /// Ring degree `N`.
    pub fn degree(&self) -> usize {
        N
    }

    /// Number `k` of mask polynomials per sample.
    pub fn mask_rank(&self) -> usize {
        self.mask_rank
    }

    pub fn alpha_min(&self) -> f64 {
        self.alpha_min
    }

    pub fn alpha_max(&self) -> f64 {
        self.alpha_max
    }

    pub fn backend(&self) -> MulBackend {
        self.multiplier.backend()
    }

    pub fn multiplier(&self) -> &Multiplier<N> {
        &self.multiplier
    }

    /// Whether `alpha` lies within the advisory noise bounds.
    pub fn noise_in_bounds(&self, alpha: f64) -> bool {
        (self.alpha_min..=self.alpha_max).contains(&alpha)
    }

    pub(crate) fn check_mask_rank(&self, actual: usize) -> TLweResult<()> {
        if actual != self.mask_rank {
            return Err(TLweError::MaskRankMismatch {
                expected: self.mask_rank,
                actual,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_valid_parameters() {
        let params = TLweParams::<1024>::new(1, 1e-9, 1e-2).unwrap();
        assert_eq!(params.degree(), 1024);
        assert_eq!(params.mask_rank(), 1);
        assert_eq!(params.backend(), MulBackend::Naive);
    }

    #[test]
    fn rejects_non_power_of_two_degree() {
        assert_eq!(
            TLweParams::<12>::new(1, 0.0, 1.0),
            Err(TLweError::InvalidDegree { degree: 12 })
        );
    }

    #[test]
    fn rejects_zero_mask_rank() {
        assert_eq!(
            TLweParams::<8>::new(0, 0.0, 1.0),
            Err(TLweError::InvalidMaskRank { mask_rank: 0 })
        );
    }

    #[test]
    fn rejects_inverted_or_non_finite_bounds() {
        assert!(matches!(
            TLweParams::<8>::new(1, 0.5, 0.1),
            Err(TLweError::InvalidNoiseBounds { .. })
        ));
        assert!(matches!(
            TLweParams::<8>::new(1, -1.0, 0.1),
            Err(TLweError::InvalidNoiseBounds { .. })
        ));
        assert!(matches!(
            TLweParams::<8>::new(1, 0.0, f64::INFINITY),
            Err(TLweError::InvalidNoiseBounds { .. })
        ));
    }

    #[test]
    fn equality_includes_backend() {
        let naive = TLweParams::<8>::new(2, 0.0, 1.0).unwrap();
        let fft = TLweParams::<8>::with_backend(2, 0.0, 1.0, MulBackend::Fft).unwrap();
        assert_ne!(naive, fft);
        assert_eq!(naive, naive.clone());
    }

    #[test]
    fn check_mask_rank_reports_both_sides() {
        let params = TLweParams::<8>::new(2, 0.0, 1.0).unwrap();
        assert!(params.check_mask_rank(2).is_ok());
        assert_eq!(
            params.check_mask_rank(3),
            Err(TLweError::MaskRankMismatch {
                expected: 2,
                actual: 3
            })
        );
    }
}
