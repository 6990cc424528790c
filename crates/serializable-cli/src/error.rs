//! Error types and handling for the CLI
//!
//! This module provides error types and utilities for handling
//! various failure modes in the CLI application.

use std::io;
use std::path::PathBuf;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error from serializable-core library
    #[error("{0}")]
    Core(#[from] serializable_core::Error),

    /// File not found
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Invalid file format
    #[error("Invalid file format for {}: expected {} format", path.display(), expected)]
    InvalidFormat { path: PathBuf, expected: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Generic error with context
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a generic error with message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::Core(_) => 2,
            Self::FileNotFound { .. } => 3,
            Self::InvalidFormat { .. } => 4,
            Self::Config(_) => 5,
            Self::Json(_) => 12,
            Self::Yaml(_) => 13,
            Self::Other { .. } => 99,
        }
    }

    /// Check if this error should display usage help
    pub fn should_show_help(&self) -> bool {
        matches!(
            self,
            Self::Core(serializable_core::Error::NotConfigured { .. })
        )
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let err = Error::FileNotFound {
            path: PathBuf::from("missing.json"),
        };
        assert_eq!(err.exit_code(), 3);
        assert!(err.to_string().contains("missing.json"));

        let err = Error::Core(serializable_core::Error::configuration("bad block"));
        assert_eq!(err.exit_code(), 2);
        assert_eq!(Error::config("x").exit_code(), 5);
        assert_eq!(Error::other("x").exit_code(), 99);
    }

    #[test]
    fn test_format_error_plain() {
        let err = Error::config("no schema");
        assert_eq!(format_error(&err, false), "Error: Configuration error: no schema");
    }

    #[test]
    fn test_format_error_core() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let core = serializable_core::Error::Decode {
            alias: "Item".to_string(),
            codec: "json".to_string(),
            source: serializable_core::CodecError::Json(source),
        };
        let formatted = format_error(&Error::Core(core), false);
        assert!(formatted.starts_with("Error: Decoding failed for 'Item' with codec 'json'"));
    }

    #[test]
    fn test_not_configured_shows_help() {
        let err = Error::Core(serializable_core::Error::NotConfigured {
            alias: "Ghost".to_string(),
        });
        assert!(err.should_show_help());
        assert!(!Error::other("x").should_show_help());
    }
}
