use thiserror::Error;

pub type Result<T> = std::result::Result<T, NpError>;

#[derive(Debug, Error)]
pub enum NpError {
    #[error("invalid probability at index {index}: {value} (must be in 1..=255)")]
    InvalidProbability { index: usize, value: u32 },

    #[error("invalid bit at index {index}: {value} (must be 0 or 1)")]
    InvalidBit { index: usize, value: u8 },

    #[error("length mismatch: {bits} bits vs {probs} probabilities")]
    LengthMismatch { bits: usize, probs: usize },

    #[error("search invariant violated at bit {bit_index}: lower bound decodes above upper bound")]
    SearchInvariantViolated { bit_index: usize },

    #[error("validation error: {0}")]
    Validation(String),

    #[error("table format error: {0}")]
    TableFormat(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
