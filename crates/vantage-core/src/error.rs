//! Error types for the VANTAGE engines.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VantageError {
    #[error("Validation error on {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type VantageResult<T> = Result<T, VantageError>;
