//! Error types for the CLI

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Invalid argument
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },

    /// A smoke check step failed
    #[error("Smoke check failed at {step}: {message}")]
    SmokeFailed {
        /// Step that failed
        step: String,
        /// Error message
        message: String,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Pagewright library error
    #[error("Pagewright error: {0}")]
    Pagewright(#[from] pagewright::PagewrightError),
}

impl CliError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a smoke failure
    #[must_use]
    pub fn smoke_failed(step: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SmokeFailed {
            step: step.into(),
            message: message.into(),
        }
    }
}
