//! Configuration management for the behavior
//!
//! Options are merged from three layers, in ascending precedence:
//! - Built-in defaults (no fields, JSON codec, no extra aliases)
//! - The global block, read from a document under the [`NAMESPACE`] key
//! - Options passed to `setup` for one record type
//!
//! The merge is key-level: each key is taken from the highest layer that
//! sets it. The merged options are then resolved against a
//! [`CodecRegistry`] into per-alias [`Settings`].
//!
//! Copyright (c) 2025 Serializable Team
//! Licensed under the Apache-2.0 license

use crate::codec::{
    CodecDirection, CodecRef, CodecRegistry, Decode, DecoderRef, Encode, EncoderRef,
    DEFAULT_CODEC,
};
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Key the global block is stored under in configuration documents
pub const NAMESPACE: &str = "Serializable";

/// Document formats understood by the loaders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Pick a format from a file extension; anything but YAML is JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Format::Yaml,
            _ => Format::Json,
        }
    }

    /// Parse a document in this format
    pub fn parse<T: DeserializeOwned>(self, content: &str) -> Result<T> {
        match self {
            Format::Json => Ok(serde_json::from_str(content)?),
            Format::Yaml => Ok(serde_yaml::from_str(content)?),
        }
    }
}

/// One layer of Serializable options
///
/// Every key is optional so that a layer only overrides what it sets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializableOptions {
    /// Field names to transform
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,

    /// Encoder used before save
    #[serde(alias = "encode", skip_serializing_if = "Option::is_none")]
    pub serialize: Option<EncoderRef>,

    /// Decoder used after fetch
    #[serde(alias = "decode", skip_serializing_if = "Option::is_none")]
    pub unserialize: Option<DecoderRef>,

    /// Extra aliases the record type may be nested under
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,
}

impl SerializableOptions {
    /// Create an empty layer
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in defaults, the lowest layer
    pub fn defaults() -> Self {
        Self {
            fields: Some(Vec::new()),
            serialize: Some(CodecRef::named(DEFAULT_CODEC)),
            unserialize: Some(CodecRef::named(DEFAULT_CODEC)),
            aliases: Some(Vec::new()),
        }
    }

    /// Set the transformed fields
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Set the encoder
    pub fn encoder(mut self, encoder: EncoderRef) -> Self {
        self.serialize = Some(encoder);
        self
    }

    /// Set the decoder
    pub fn decoder(mut self, decoder: DecoderRef) -> Self {
        self.unserialize = Some(decoder);
        self
    }

    /// Use one registered codec name for both directions
    pub fn codec(self, name: &str) -> Self {
        self.encoder(CodecRef::named(name)).decoder(CodecRef::named(name))
    }

    /// Set the extra aliases
    pub fn aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = Some(aliases.into_iter().map(Into::into).collect());
        self
    }

    /// Merge this layer over a lower one (this layer takes precedence)
    pub fn merge_over(&self, lower: &SerializableOptions) -> SerializableOptions {
        SerializableOptions {
            fields: self.fields.clone().or_else(|| lower.fields.clone()),
            serialize: self.serialize.clone().or_else(|| lower.serialize.clone()),
            unserialize: self.unserialize.clone().or_else(|| lower.unserialize.clone()),
            aliases: self.aliases.clone().or_else(|| lower.aliases.clone()),
        }
    }
}

/// Process-wide default options
///
/// Built once by the host and handed to the behavior constructor.
#[derive(Debug, Clone, Default)]
pub struct GlobalConfig {
    options: SerializableOptions,
}

impl GlobalConfig {
    /// Wrap an options layer as the global block
    pub fn new(options: SerializableOptions) -> Self {
        Self { options }
    }

    /// Read the global block from a parsed configuration document
    ///
    /// A document without the [`NAMESPACE`] key yields an empty block.
    pub fn from_document(document: &Value) -> Result<Self> {
        match document.get(NAMESPACE) {
            None | Some(Value::Null) => Ok(Self::default()),
            Some(block) => {
                let options = serde_json::from_value(block.clone()).map_err(|e| {
                    Error::Configuration {
                        message: format!("Invalid '{}' block: {}", NAMESPACE, e),
                        source: Some(e.into()),
                    }
                })?;
                Ok(Self::new(options))
            }
        }
    }

    /// Parse a configuration document and read its global block
    pub fn parse(content: &str, format: Format) -> Result<Self> {
        let document: Value = format.parse(content)?;
        Self::from_document(&document)
    }

    /// Load a configuration document from a JSON or YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, Format::from_path(path))
    }

    /// The global options layer
    pub fn options(&self) -> &SerializableOptions {
        &self.options
    }

    /// Merge per-call options over this block and the built-in defaults
    pub fn layer(&self, options: &SerializableOptions) -> SerializableOptions {
        options.merge_over(&self.options.merge_over(&SerializableOptions::defaults()))
    }
}

/// A codec half resolved at setup time
pub(crate) enum Dispatch<T: ?Sized> {
    Bound { label: String, codec: Arc<T> },
    Unresolved(String),
}

impl<T: ?Sized> Dispatch<T> {
    fn from_resolution(reference: &CodecRef<T>, resolved: Option<Arc<T>>) -> Self {
        match resolved {
            Some(codec) => Dispatch::Bound {
                label: reference.label().to_string(),
                codec,
            },
            None => Dispatch::Unresolved(reference.label().to_string()),
        }
    }

    fn label(&self) -> &str {
        match self {
            Dispatch::Bound { label, .. } => label.as_str(),
            Dispatch::Unresolved(label) => label.as_str(),
        }
    }

    fn bound(&self, alias: &str, direction: CodecDirection) -> Result<(&str, &T)> {
        match self {
            Dispatch::Bound { label, codec } => Ok((label.as_str(), &**codec)),
            Dispatch::Unresolved(label) => Err(Error::CodecDispatch {
                alias: alias.to_string(),
                codec: label.clone(),
                direction,
            }),
        }
    }
}

/// Resolved configuration for one record-type alias
pub struct Settings {
    fields: Vec<String>,
    aliases: Vec<String>,
    encoder: Dispatch<dyn Encode>,
    decoder: Dispatch<dyn Decode>,
}

impl Settings {
    /// Resolve merged options against a registry
    ///
    /// Unknown codec names are kept and reported when first dispatched.
    pub fn resolve(options: &SerializableOptions, registry: &CodecRegistry) -> Self {
        let complete = options.merge_over(&SerializableOptions::defaults());
        let encoder = complete
            .serialize
            .unwrap_or_else(|| CodecRef::named(DEFAULT_CODEC));
        let decoder = complete
            .unserialize
            .unwrap_or_else(|| CodecRef::named(DEFAULT_CODEC));

        let settings = Self {
            fields: unique(complete.fields.unwrap_or_default()),
            aliases: complete.aliases.unwrap_or_default(),
            encoder: Dispatch::from_resolution(&encoder, registry.resolve_encoder(&encoder)),
            decoder: Dispatch::from_resolution(&decoder, registry.resolve_decoder(&decoder)),
        };

        if let Dispatch::Unresolved(name) = &settings.encoder {
            log::warn!("Encoder '{}' is not registered; saves will fail", name);
        }
        if let Dispatch::Unresolved(name) = &settings.decoder {
            log::warn!("Decoder '{}' is not registered; fetches will fail", name);
        }

        settings
    }

    /// Fields subject to transform
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Statically configured extra aliases
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Label of the configured encoder
    pub fn encoder_label(&self) -> &str {
        self.encoder.label()
    }

    /// Label of the configured decoder
    pub fn decoder_label(&self) -> &str {
        self.decoder.label()
    }

    /// Encode a value with the configured encoder
    pub fn encode(&self, alias: &str, value: &Value) -> Result<String> {
        let (label, encoder) = self.encoder.bound(alias, CodecDirection::Encode)?;
        encoder.encode(value).map_err(|source| Error::Encode {
            alias: alias.to_string(),
            codec: label.to_string(),
            source,
        })
    }

    /// Decode a stored value with the configured decoder
    pub fn decode(&self, alias: &str, stored: &str) -> Result<Value> {
        let (label, decoder) = self.decoder.bound(alias, CodecDirection::Decode)?;
        decoder.decode(stored).map_err(|source| Error::Decode {
            alias: alias.to_string(),
            codec: label.to_string(),
            source,
        })
    }
}

/// Drop repeated names, keeping first-seen order
fn unique(names: Vec<String>) -> Vec<String> {
    let mut kept: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        if !kept.contains(&name) {
            kept.push(name);
        }
    }
    kept
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("fields", &self.fields)
            .field("aliases", &self.aliases)
            .field("encoder", &self.encoder_label())
            .field("decoder", &self.decoder_label())
            .finish()
    }
}
