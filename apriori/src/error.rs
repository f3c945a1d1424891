//! Error types for ingestion and configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AprioriError {
    #[error("failed to read transactions: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid item identifier {token:?} on line {line}")]
    InvalidItem { line: usize, token: String },

    #[error("the value of minimal support should be set in 0~1, the input value is {0}")]
    InvalidThreshold(f64),
}

impl AprioriError {
    pub fn invalid_item(line: usize, token: impl Into<String>) -> Self {
        AprioriError::InvalidItem {
            line,
            token: token.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AprioriError>;
