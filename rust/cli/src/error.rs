//! Error types for the CLI application.

use std::fmt;

use sequence_engine::errors::RuleError;

use crate::config::ConfigError;

/// Custom error type for CLI operations.
///
/// Every variant maps to exit code `2`.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Rule violation reported by the engine
    Engine(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<RuleError> for CliError {
    fn from(error: RuleError) -> Self {
        CliError::Engine(error.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_errors_keep_their_message() {
        let e: CliError = RuleError::CardCellMismatch.into();
        assert_eq!(e.to_string(), "Engine error: Card doesn't match this space");
    }

    #[test]
    fn io_errors_expose_source() {
        use std::error::Error;
        let e: CliError = std::io::Error::other("disk").into();
        assert!(e.source().is_some());
    }
}
