//! Configuration loading errors.

use thiserror::Error;

/// Error loading or validating configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigLoadError {
    /// I/O error
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),
    /// Values parsed but out of range
    #[error("Invalid value: {0}")]
    Invalid(String),
}
