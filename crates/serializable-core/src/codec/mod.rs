//! Codec strategy types for field encoding
//!
//! A codec is the pair of plug-points the behavior dispatches to: an
//! [`Encode`] that turns an in-memory value into its stored string form, and a
//! [`Decode`] that turns the stored string back into a value. Both halves are
//! configured independently and any closure with the matching signature
//! implements them.
//!
//! # Module Organization
//!
//! - [`built_in`] - JSON and YAML codecs shipped with the crate
//! - [`registry`] - name-based lookup used to resolve configured references
//!
//! # Examples
//!
//! ```
//! use serializable_core::codec::{Decode, Encode, JsonCodec};
//! use serde_json::json;
//!
//! let codec = JsonCodec;
//! let stored = codec.encode(&json!({"x": 1})).unwrap();
//! assert_eq!(codec.decode(&stored).unwrap(), json!({"x": 1}));
//! ```
//!
//! Copyright (c) 2025 Serializable Team
//! Licensed under the Apache-2.0 license

pub mod built_in;
pub mod registry;

pub use built_in::{JsonCodec, PrettyJsonCodec, YamlCodec};
pub use registry::{CodecRegistry, DEFAULT_CODEC};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised by codec implementations
#[derive(Error, Debug)]
pub enum CodecError {
    /// JSON encoding or decoding failed
    #[error("JSON codec failed: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML encoding or decoding failed
    #[error("YAML codec failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Failure reported by a caller-supplied codec
    #[error("{message}")]
    Custom { message: String },
}

impl CodecError {
    /// Create an error for a caller-supplied codec
    pub fn custom(message: impl Into<String>) -> Self {
        CodecError::Custom {
            message: message.into(),
        }
    }
}

/// Result type returned by codec implementations
pub type CodecResult<T> = std::result::Result<T, CodecError>;

/// Which half of a codec an operation needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecDirection {
    /// In-memory value to stored string
    Encode,
    /// Stored string to in-memory value
    Decode,
}

impl fmt::Display for CodecDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecDirection::Encode => write!(f, "encoder"),
            CodecDirection::Decode => write!(f, "decoder"),
        }
    }
}

/// Turns an in-memory value into its stored representation
pub trait Encode: Send + Sync {
    fn encode(&self, value: &Value) -> CodecResult<String>;
}

/// Turns a stored representation back into an in-memory value
pub trait Decode: Send + Sync {
    fn decode(&self, stored: &str) -> CodecResult<Value>;
}

impl<F> Encode for F
where
    F: Fn(&Value) -> CodecResult<String> + Send + Sync,
{
    fn encode(&self, value: &Value) -> CodecResult<String> {
        self(value)
    }
}

impl<F> Decode for F
where
    F: Fn(&str) -> CodecResult<Value> + Send + Sync,
{
    fn decode(&self, stored: &str) -> CodecResult<Value> {
        self(stored)
    }
}

/// Reference to one half of a codec, as written in configuration
///
/// `Named` references are looked up in a [`CodecRegistry`] when the behavior
/// is set up. `Bound` references carry the implementation directly.
pub enum CodecRef<T: ?Sized> {
    /// Codec registered under a name
    Named(String),
    /// Codec instance supplied programmatically
    Bound(Arc<T>),
}

/// Reference to an encoder
pub type EncoderRef = CodecRef<dyn Encode>;

/// Reference to a decoder
pub type DecoderRef = CodecRef<dyn Decode>;

impl<T: ?Sized> CodecRef<T> {
    /// Reference a registered codec by name
    pub fn named(name: impl Into<String>) -> Self {
        CodecRef::Named(name.into())
    }

    /// Label used in errors and logs
    pub fn label(&self) -> &str {
        match self {
            CodecRef::Named(name) => name.as_str(),
            CodecRef::Bound(_) => "custom",
        }
    }
}

impl EncoderRef {
    /// Bind an encoder instance or closure
    pub fn from_encoder(encoder: impl Encode + 'static) -> Self {
        CodecRef::Bound(Arc::new(encoder))
    }
}

impl DecoderRef {
    /// Bind a decoder instance or closure
    pub fn from_decoder(decoder: impl Decode + 'static) -> Self {
        CodecRef::Bound(Arc::new(decoder))
    }
}

impl<T: ?Sized> Clone for CodecRef<T> {
    fn clone(&self) -> Self {
        match self {
            CodecRef::Named(name) => CodecRef::Named(name.clone()),
            CodecRef::Bound(codec) => CodecRef::Bound(Arc::clone(codec)),
        }
    }
}

impl<T: ?Sized> fmt::Debug for CodecRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecRef::Named(name) => f.debug_tuple("Named").field(name).finish(),
            CodecRef::Bound(_) => f.write_str("Bound(..)"),
        }
    }
}

impl<'de, T: ?Sized> Deserialize<'de> for CodecRef<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(CodecRef::Named)
    }
}

impl<T: ?Sized> Serialize for CodecRef<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}
