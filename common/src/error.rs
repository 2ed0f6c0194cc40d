use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndicatorError {
    #[error("Invalid lag: {lag} (lag must not be negative)")]
    InvalidLag { lag: i64 },

    #[error("Length mismatch: expected {expected} values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Invalid period: {period} (period must be at least 1)")]
    InvalidPeriod { period: i64 },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, IndicatorError>;
