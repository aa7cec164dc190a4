use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TLweError {
    #[error("ring degree must be a power of two, got {degree}")]
    InvalidDegree { degree: usize },

    #[error("mask rank must be at least 1, got {mask_rank}")]
    InvalidMaskRank { mask_rank: usize },

    #[error("invalid noise bounds: alpha_min {alpha_min:e}, alpha_max {alpha_max:e}")]
    InvalidNoiseBounds { alpha_min: f64, alpha_max: f64 },

    #[error("noise standard deviation must be finite and non-negative, got {alpha}")]
    InvalidStandardDeviation { alpha: f64 },

    #[error("message space size must be at least 2, got {msize}")]
    InvalidMessageSpace { msize: u32 },

    #[error("mask rank mismatch: expected {expected}, got {actual}")]
    MaskRankMismatch { expected: usize, actual: usize },

    #[error("key polynomial {polynomial} has non-binary coefficient {value} at index {index}")]
    NonBinaryKey {
        polynomial: usize,
        index: usize,
        value: i32,
    },
}

pub type TLweResult<T> = Result<T, TLweError>;
