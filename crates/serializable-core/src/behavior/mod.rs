//! The Serializable behavior
//!
//! Hooks into a host ORM's lifecycle to keep designated fields in their
//! stored (string) form in the database and in their decoded form in memory.
//!
//! # Module Organization
//!
//! - [`aliases`] - alias resolution for self-referential record types
//! - [`locator`] - recursive search for fields in nested results
//!
//! # Host contract
//!
//! The host calls [`SerializableBehavior::setup`] once per record type, then
//! invokes the hooks around every read and write. Hooks mutate the `Value`
//! they are given; the host keeps using that value as the operation's
//! result or as the data it persists.
//!
//! # Examples
//!
//! ```
//! use serializable_core::{GlobalConfig, ModelSchema, SerializableBehavior, SerializableOptions};
//! use serde_json::json;
//!
//! let model = ModelSchema::builder("Item").build();
//! let mut behavior = SerializableBehavior::new(GlobalConfig::default());
//! behavior.setup(&model, SerializableOptions::new().fields(["data"]));
//!
//! let mut results = json!([{"Item": {"data": "{\"x\":1}"}}]);
//! behavior.after_fetch(&model, &mut results).unwrap();
//! assert_eq!(results, json!([{"Item": {"data": {"x": 1}}}]));
//! ```
//!
//! Copyright (c) 2025 Serializable Team
//! Licensed under the Apache-2.0 license

pub mod aliases;
pub mod locator;


pub use aliases::resolve_aliases;
pub use locator::RowKey;

use crate::codec::CodecRegistry;
use crate::config::{GlobalConfig, SerializableOptions, Settings};
use crate::schema::{ModelSchema, RecordType};
use crate::{Error, Result};
use locator::{entries_mut, is_set, FieldLocator};
use serde_json::Value;
use std::collections::HashMap;

/// Lifecycle hooks a host ORM invokes on its behaviors
///
/// Every hook defaults to doing nothing.
pub trait ModelBehavior {
    /// Called after every read with the full result set
    fn after_find(&self, _model: &dyn RecordType, _results: &mut Value, _primary: bool) -> Result<()> {
        Ok(())
    }

    /// Called before every write; returning `false` aborts the save
    fn before_save(&self, _model: &dyn RecordType, _data: &mut Value) -> Result<bool> {
        Ok(true)
    }

    /// Called after every successful write with the in-memory record
    fn after_save(&self, _model: &dyn RecordType, _created: bool, _data: &mut Value) -> Result<()> {
        Ok(())
    }
}

/// Transparent field serialization for record types
#[derive(Debug, Default)]
pub struct SerializableBehavior {
    global: GlobalConfig,
    registry: CodecRegistry,
    settings: HashMap<String, Settings>,
}

impl SerializableBehavior {
    /// Create a behavior with the given global block and the built-in codecs
    pub fn new(global: GlobalConfig) -> Self {
        Self {
            global,
            registry: CodecRegistry::new(),
            settings: HashMap::new(),
        }
    }

    /// Use a custom codec registry for subsequent setups
    pub fn with_registry(mut self, registry: CodecRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// The codec registry named references are resolved against
    pub fn registry(&self) -> &CodecRegistry {
        &self.registry
    }

    /// Configure a record type
    ///
    /// Options are merged over the global block and the built-in defaults.
    /// Setting up the same alias again replaces its configuration.
    pub fn setup(&mut self, model: &dyn RecordType, options: SerializableOptions) {
        let merged = self.global.layer(&options);
        let settings = Settings::resolve(&merged, &self.registry);

        log::debug!(
            "Serializable set up for '{}' with fields {:?}",
            model.alias(),
            settings.fields()
        );

        self.settings.insert(model.alias().to_string(), settings);
    }

    /// Configure a record type from its own schema block
    pub fn setup_from_schema(&mut self, schema: &ModelSchema) {
        let options = schema.serializable.clone().unwrap_or_default();
        self.setup(schema, options);
    }

    /// Whether an alias has been set up
    pub fn is_configured(&self, alias: &str) -> bool {
        self.settings.contains_key(alias)
    }

    /// Resolved configuration for an alias
    pub fn settings(&self, alias: &str) -> Result<&Settings> {
        self.settings.get(alias).ok_or_else(|| Error::NotConfigured {
            alias: alias.to_string(),
        })
    }

    /// Every alias the record type's fields are searched under
    pub fn aliases(&self, model: &dyn RecordType) -> Result<Vec<String>> {
        let settings = self.settings(model.alias())?;
        Ok(resolve_aliases(model, settings.aliases()))
    }

    /// Decode configured fields in every row of a result set
    pub fn after_fetch(&self, model: &dyn RecordType, results: &mut Value) -> Result<()> {
        let settings = self.settings(model.alias())?;
        if settings.fields().is_empty() {
            return Ok(());
        }

        let aliases = resolve_aliases(model, settings.aliases());
        let locator = FieldLocator::new(settings, model.alias(), &aliases);

        for (key, row) in entries_mut(results) {
            for field in settings.fields() {
                locator.decode_field(field, key, row)?;
            }
        }

        Ok(())
    }

    /// Encode configured fields in the data about to be persisted
    ///
    /// Fields are looked up under the record type's alias first, then at the
    /// top level. Absent fields are left alone.
    pub fn before_save(&self, model: &dyn RecordType, data: &mut Value) -> Result<bool> {
        let alias = model.alias();
        let settings = self.settings(alias)?;

        for field in settings.fields() {
            let field = field.as_str();
            let slot = if is_set(data.get(alias).and_then(|row| row.get(field))) {
                data.get_mut(alias).and_then(|row| row.get_mut(field))
            } else if is_set(data.get(field)) {
                data.get_mut(field)
            } else {
                None
            };

            if let Some(slot) = slot {
                let stored = settings.encode(alias, slot)?;
                log::trace!("Encoded field '{}' for '{}'", field, alias);
                *slot = Value::String(stored);
            }
        }

        Ok(true)
    }

    /// Restore the in-memory form of data that was just written
    pub fn after_save(&self, model: &dyn RecordType, created: bool, data: &mut Value) -> Result<()> {
        log::trace!(
            "Normalizing saved data for '{}' (created: {})",
            model.alias(),
            created
        );
        self.after_fetch(model, data)
    }

    /// Encode a value with the encoder configured for an alias
    pub fn encode(&self, alias: &str, value: &Value) -> Result<String> {
        self.settings(alias)?.encode(alias, value)
    }

    /// Decode a value with the decoder configured for an alias
    ///
    /// Only strings are in the stored form; anything else is returned
    /// unchanged, so decoding twice is safe.
    pub fn decode(&self, alias: &str, value: &Value) -> Result<Value> {
        let settings = self.settings(alias)?;
        match value {
            Value::String(stored) => settings.decode(alias, stored),
            other => Ok(other.clone()),
        }
    }
}

impl ModelBehavior for SerializableBehavior {
    fn after_find(&self, model: &dyn RecordType, results: &mut Value, _primary: bool) -> Result<()> {
        self.after_fetch(model, results)
    }

    fn before_save(&self, model: &dyn RecordType, data: &mut Value) -> Result<bool> {
        SerializableBehavior::before_save(self, model, data)
    }

    fn after_save(&self, model: &dyn RecordType, created: bool, data: &mut Value) -> Result<()> {
        SerializableBehavior::after_save(self, model, created, data)
    }
}
