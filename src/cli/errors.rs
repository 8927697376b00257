//! CLI-specific error types
//!
//! All CLI errors are fatal: they are printed to stderr and the process
//! exits non-zero.

use std::io;

use thiserror::Error;

use crate::observability::ObservabilityError;
use crate::store::StoreError;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file missing fields, malformed, or out of range
    #[error("Configuration error: {0}")]
    Config(String),

    /// `init` would overwrite an existing configuration file
    #[error("Configuration file already exists: {0}")]
    AlreadyInitialized(String),

    /// Record store could not be opened
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Logging could not be initialized
    #[error("{0}")]
    Observability(#[from] ObservabilityError),

    /// Filesystem or socket failure
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Stable error code for scripts
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Config(_) => "CLI_CONFIG_ERROR",
            CliError::AlreadyInitialized(_) => "CLI_ALREADY_INITIALIZED",
            CliError::Store(_) => "CLI_STORE_ERROR",
            CliError::Observability(_) => "CLI_LOGGING_ERROR",
            CliError::Io(_) => "CLI_IO_ERROR",
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::config_error(format!("JSON error: {}", e))
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(CliError::config_error("x").code(), "CLI_CONFIG_ERROR");
        assert_eq!(
            CliError::AlreadyInitialized("a.json".to_string()).code(),
            "CLI_ALREADY_INITIALIZED"
        );
        assert_eq!(
            CliError::from(io::Error::new(io::ErrorKind::Other, "x")).code(),
            "CLI_IO_ERROR"
        );
    }

    #[test]
    fn test_display() {
        let err = CliError::config_error("port must be > 0");
        assert_eq!(err.to_string(), "Configuration error: port must be > 0");
    }
}
