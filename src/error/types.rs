//! Custom error types for configuration construction

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for configuration validation failures
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    /// A field's coerced value failed its validator, or an unrecognized key
    /// was supplied
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// A cross-field invariant is violated
    #[error("Inconsistent configuration: {message}")]
    Inconsistent { message: String },

    /// A required path field does not reference an existing filesystem entry
    #[error("Missing input file: '{field}' does not exist: {}", path.display())]
    MissingInput { field: String, path: PathBuf },
}

impl ConfigError {
    /// Create an invalid-value error naming the offending field
    #[inline]
    pub fn invalid_value<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a cross-field inconsistency error
    #[inline]
    pub fn inconsistent<M: Into<String>>(message: M) -> Self {
        Self::Inconsistent {
            message: message.into(),
        }
    }

    /// Create a missing-input-file error
    #[inline]
    pub fn missing_input<F: Into<String>, P: Into<PathBuf>>(field: F, path: P) -> Self {
        Self::MissingInput {
            field: field.into(),
            path: path.into(),
        }
    }
}
