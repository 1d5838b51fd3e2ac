//! Error types for the shuffle-sort CLI.

use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Bad command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Error raised by the shuffle_sort library
    #[error("Library error: {0}")]
    Library(#[from] shuffle_sort::ShuffleSortError),

    /// JSON output failed
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),

    /// A self-check produced an unexpected result
    #[error("Verification failed: {0}")]
    Verification(String),
}

impl CliError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a verification error
    pub fn verification(msg: impl Into<String>) -> Self {
        Self::Verification(msg.into())
    }
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
