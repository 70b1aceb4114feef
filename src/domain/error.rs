use std::io;

use thiserror::Error;

/// Library-wide error type for infragen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// The interactive prompt mechanism failed or was interrupted.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    Parse { what: String, details: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn parse_error<W: Into<String>, D: Into<String>>(what: W, details: D) -> Self {
        AppError::Parse { what: what.into(), details: details.into() }
    }
}
