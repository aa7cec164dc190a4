pub mod sampling;
pub mod torus;

pub use sampling::{
    binary_coefficients, gaussian32, uniform_torus_coefficients,
};
pub use torus::{
    Torus32, approx_phase, dtot32, mod_switch_from_torus32, mod_switch_to_torus32,
    t32tod,
};
