pub mod secret_key;

pub use secret_key::TLweKey;
