pub mod crypto;
pub mod keys;
pub mod math;
pub mod rings;

pub use crypto::{TLweError, TLweParams, TLweParamsBuilder, TLweResult, TLweSample, Variance};
pub use keys::TLweKey;
pub use math::{
    Torus32, approx_phase, dtot32, mod_switch_from_torus32, mod_switch_to_torus32, t32tod,
};
pub use rings::{
    FftPolyMultiplier, IntPolynomial, MulBackend, NaivePolyMultiplier, PolyMultiplier,
    TorusPolynomial,
};
