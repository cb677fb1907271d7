//! Error types for invoicedash-core
//!
//! Library consumers get structured errors; the CLI wraps them with `anyhow`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Validation error for user-supplied input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// Field is shorter than allowed
    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    /// String doesn't match the required format
    #[error("{field}: {reason}")]
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },

    /// Invalid enum variant
    #[error("invalid {field} value: '{value}'")]
    InvalidVariant { field: &'static str, value: String },
}

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid TOML in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid value for {var}: '{value}'")]
    InvalidEnv { var: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_display() {
        let err = ValidationError::TooShort {
            field: "password",
            min: 6,
        };
        assert_eq!(err.to_string(), "password must be at least 6 characters");

        let err = ValidationError::InvalidVariant {
            field: "status",
            value: "overdue".into(),
        };
        assert_eq!(err.to_string(), "invalid status value: 'overdue'");
    }

    #[test]
    fn config_display_names_variable() {
        let err = ConfigError::InvalidEnv {
            var: "INVOICEDASH_BIND",
            value: "nope".into(),
        };
        assert!(err.to_string().contains("INVOICEDASH_BIND"));
        assert!(err.to_string().contains("nope"));
    }
}
