//! Core error types for gala-core.
//!
//! The behavioral state machines (gate, widgets, gallery, contract) cannot
//! fail: invalid operations are no-ops by design. Errors only arise at the
//! configuration and CLI boundary, and are defined here using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for gala-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file
    #[error("Failed to read config at {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the config file
    #[error("Failed to write config at {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config could not be serialized to TOML
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Target instant literal does not parse as a date-time
    #[error("Invalid target instant '{value}': {source}")]
    InvalidTarget {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Target instant falls in a local-time gap (e.g. a DST jump)
    #[error("Target instant '{value}' is not a valid local time")]
    UnrepresentableTarget { value: String },

    /// A field failed validation
    #[error("Invalid value for {field}: {message}")]
    InvalidValue {
        field: &'static str,
        message: String,
    },

    /// No config directory available on this platform
    #[error("No config directory available on this platform")]
    NoConfigDir,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_wrap_into_core() {
        let err = CoreError::from(ConfigError::NoConfigDir);
        assert!(matches!(err, CoreError::Config(_)));
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn io_errors_wrap_into_core() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = CoreError::from(io);
        assert!(matches!(err, CoreError::Io(_)));
        assert!(err.to_string().starts_with("IO error"));
    }

    #[test]
    fn json_errors_wrap_into_core() {
        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = CoreError::from(json);
        assert!(matches!(err, CoreError::Json(_)));
    }
}
