//! Name-based codec lookup
//!
//! Configuration documents refer to codecs by name. The registry maps those
//! names to implementations and is consulted once per record type, when the
//! behavior is set up.
//!
//! Copyright (c) 2025 Serializable Team
//! Licensed under the Apache-2.0 license

use super::{CodecRef, Decode, Encode, JsonCodec, PrettyJsonCodec, YamlCodec};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Name of the codec used when no layer configures one
pub const DEFAULT_CODEC: &str = "json";

/// Registry of named encoders and decoders
#[derive(Clone)]
pub struct CodecRegistry {
    encoders: BTreeMap<String, Arc<dyn Encode>>,
    decoders: BTreeMap<String, Arc<dyn Decode>>,
}

impl CodecRegistry {
    /// Create a registry holding the built-in codecs
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(DEFAULT_CODEC, JsonCodec);
        registry.register("json_pretty", PrettyJsonCodec);
        registry.register("yaml", YamlCodec);
        registry
    }

    /// Create a registry with nothing in it
    pub fn empty() -> Self {
        Self {
            encoders: BTreeMap::new(),
            decoders: BTreeMap::new(),
        }
    }

    /// Register both halves of a codec under one name
    pub fn register<C>(&mut self, name: impl Into<String>, codec: C) -> &mut Self
    where
        C: Encode + Decode + 'static,
    {
        let name = name.into();
        let codec = Arc::new(codec);
        self.encoders.insert(name.clone(), codec.clone());
        self.decoders.insert(name, codec);
        self
    }

    /// Register an encoder
    pub fn register_encoder(
        &mut self,
        name: impl Into<String>,
        encoder: impl Encode + 'static,
    ) -> &mut Self {
        self.encoders.insert(name.into(), Arc::new(encoder));
        self
    }

    /// Register a decoder
    pub fn register_decoder(
        &mut self,
        name: impl Into<String>,
        decoder: impl Decode + 'static,
    ) -> &mut Self {
        self.decoders.insert(name.into(), Arc::new(decoder));
        self
    }

    /// Look up an encoder by name
    pub fn encoder(&self, name: &str) -> Option<Arc<dyn Encode>> {
        self.encoders.get(name).cloned()
    }

    /// Look up a decoder by name
    pub fn decoder(&self, name: &str) -> Option<Arc<dyn Decode>> {
        self.decoders.get(name).cloned()
    }

    /// Resolve an encoder reference
    pub fn resolve_encoder(&self, reference: &CodecRef<dyn Encode>) -> Option<Arc<dyn Encode>> {
        match reference {
            CodecRef::Named(name) => self.encoder(name),
            CodecRef::Bound(encoder) => Some(Arc::clone(encoder)),
        }
    }

    /// Resolve a decoder reference
    pub fn resolve_decoder(&self, reference: &CodecRef<dyn Decode>) -> Option<Arc<dyn Decode>> {
        match reference {
            CodecRef::Named(name) => self.decoder(name),
            CodecRef::Bound(decoder) => Some(Arc::clone(decoder)),
        }
    }

    /// Names that have at least one half registered
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .encoders
            .keys()
            .chain(self.decoders.keys())
            .map(String::as_str)
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}

impl Default for CodecRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CodecRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodecRegistry")
            .field("encoders", &self.encoders.keys().collect::<Vec<_>>())
            .field("decoders", &self.decoders.keys().collect::<Vec<_>>())
            .finish()
    }
}
