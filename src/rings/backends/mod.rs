pub mod fft;
pub mod naive;

pub use fft::FftPolyMultiplier;
pub use naive::NaivePolyMultiplier;

use super::{IntPolynomial, MulBackend, PolyMultiplier, TorusPolynomial};

/// The multiplication backend a [`TLweParams`](crate::TLweParams) value
/// routes every ring product through.
#[derive(Debug, Clone)]
pub enum Multiplier<const N: usize> {
    Naive(NaivePolyMultiplier),
    Fft(FftPolyMultiplier<N>),
}

impl<const N: usize> Multiplier<N> {
    pub fn new(backend: MulBackend) -> Self {
        match backend {
            MulBackend::Naive => Self::Naive(NaivePolyMultiplier),
            MulBackend::Fft => Self::Fft(FftPolyMultiplier::new()),
        }
    }

    pub fn backend(&self) -> MulBackend {
        match self {
            Self::Naive(_) => MulBackend::Naive,
            Self::Fft(_) => MulBackend::Fft,
        }
    }
}

// Plans are fully determined by `N`, so two multipliers are interchangeable
// exactly when they use the same backend.
impl<const N: usize> PartialEq for Multiplier<N> {
    fn eq(&self, other: &Self) -> bool {
        self.backend() == other.backend()
    }
}

impl<const N: usize> PolyMultiplier<N> for Multiplier<N> {
    fn mul_r(&self, p: &IntPolynomial<N>, t: &TorusPolynomial<N>) -> TorusPolynomial<N> {
        match self {
            Self::Naive(m) => m.mul_r(p, t),
            Self::Fft(m) => m.mul_r(p, t),
        }
    }

    fn add_mul_r(
        &self,
        result: &mut TorusPolynomial<N>,
        p: &IntPolynomial<N>,
        t: &TorusPolynomial<N>,
    ) {
        match self {
            Self::Naive(m) => m.add_mul_r(result, p, t),
            Self::Fft(m) => m.add_mul_r(result, p, t),
        }
    }

    fn sub_mul_r(
        &self,
        result: &mut TorusPolynomial<N>,
        p: &IntPolynomial<N>,
        t: &TorusPolynomial<N>,
    ) {
        match self {
            Self::Naive(m) => m.sub_mul_r(result, p, t),
            Self::Fft(m) => m.sub_mul_r(result, p, t),
        }
    }
}
