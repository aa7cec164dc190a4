//! TLWE parameters, samples and the operations on them
//!
//! This module holds the user-facing API: parameter construction, encryption
//! and decryption under a [`crate::TLweKey`], and the linear sample algebra
//! with its variance bookkeeping.

mod algebra;
pub mod builder;
pub mod errors;
pub mod operations;
pub mod params;
pub mod types;
pub mod variance;

// Re-export the main types users need
pub use builder::TLweParamsBuilder;
pub use errors::{TLweError, TLweResult};
pub use params::TLweParams;
pub use types::TLweSample;
pub use variance::Variance;
