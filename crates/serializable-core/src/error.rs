//! Error types for the Serializable core library
//!
//! This module defines the error handling system for the behavior,
//! using thiserror for error definitions and anyhow for loosely typed sources.

use crate::codec::{CodecDirection, CodecError};
use thiserror::Error;

/// Main error type for Serializable operations
#[derive(Error, Debug)]
pub enum Error {
    /// A configured codec reference could not be dispatched
    ///
    /// Codec names are not validated at setup, so this surfaces the first
    /// time the behavior needs the codec.
    #[error("Codec dispatch failed: no {direction} named '{codec}' for '{alias}'")]
    CodecDispatch {
        alias: String,
        codec: String,
        direction: CodecDirection,
    },

    /// The encoder rejected an in-memory value
    #[error("Encoding failed for '{alias}' with codec '{codec}': {source}")]
    Encode {
        alias: String,
        codec: String,
        #[source]
        source: CodecError,
    },

    /// The decoder rejected a stored value
    #[error("Decoding failed for '{alias}' with codec '{codec}': {source}")]
    Decode {
        alias: String,
        codec: String,
        #[source]
        source: CodecError,
    },

    /// A hook fired for a record type that was never set up
    #[error("Record type '{alias}' has no Serializable configuration")]
    NotConfigured { alias: String },

    /// Configuration document errors
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// JSON parsing and serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// YAML parsing and serialization errors
    #[error("YAML error: {message}")]
    Yaml {
        message: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a configuration error without an underlying source
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
            source: None,
        }
    }
}

// Conversion implementations
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Yaml {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NotConfigured {
            alias: "Category".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Record type 'Category' has no Serializable configuration"
        );
    }

    #[test]
    fn test_codec_dispatch_display() {
        let err = Error::CodecDispatch {
            alias: "Category".to_string(),
            codec: "msgpack".to_string(),
            direction: CodecDirection::Decode,
        };
        assert_eq!(
            err.to_string(),
            "Codec dispatch failed: no decoder named 'msgpack' for 'Category'"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = source.into();
        assert!(matches!(err, Error::Json { .. }));
        assert!(err.to_string().starts_with("JSON error:"));
    }
}
