pub mod backends;
pub mod int_poly;
pub mod torus_poly;
pub mod traits;

pub use backends::{FftPolyMultiplier, Multiplier, NaivePolyMultiplier};
pub use int_poly::IntPolynomial;
pub use torus_poly::TorusPolynomial;
pub use traits::PolyMultiplier;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MulBackend {
    /// Schoolbook, exact for any input.
    #[default]
    Naive,
    /// Twisted complex FFT (rustfft).
    Fft,
}
