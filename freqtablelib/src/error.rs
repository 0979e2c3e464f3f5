//! Error types for freqtablelib

use thiserror::Error;

/// Errors that can occur while building a table descriptor
#[derive(Error, Debug)]
pub enum FreqTableError {
    /// The input cannot be enumerated as a word -> count mapping
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// The input text is not valid JSON
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FreqTableError {
    /// Shorthand for an `InvalidInput` error.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        FreqTableError::InvalidInput {
            reason: reason.into(),
        }
    }
}
