//! Record type descriptions supplied by the host ORM
//!
//! The behavior only needs three things from a record type: the alias it is
//! addressed by, its underlying type name, and its declared associations.
//! Hosts expose those through [`RecordType`]; [`ModelSchema`] is a concrete,
//! serde-loadable implementation for hosts that describe their models in
//! JSON or YAML documents.
//!
//! Copyright (c) 2025 Serializable Team
//! Licensed under the Apache-2.0 license

use crate::config::{Format, SerializableOptions};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// Kind of a declared association
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssociationKind {
    BelongsTo,
    HasOne,
    HasMany,
    HasAndBelongsToMany,
}

impl AssociationKind {
    /// All association kinds, in declaration order
    pub const ALL: [AssociationKind; 4] = [
        AssociationKind::BelongsTo,
        AssociationKind::HasOne,
        AssociationKind::HasMany,
        AssociationKind::HasAndBelongsToMany,
    ];
}

impl fmt::Display for AssociationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssociationKind::BelongsTo => write!(f, "belongsTo"),
            AssociationKind::HasOne => write!(f, "hasOne"),
            AssociationKind::HasMany => write!(f, "hasMany"),
            AssociationKind::HasAndBelongsToMany => write!(f, "hasAndBelongsToMany"),
        }
    }
}

/// A declared association
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Association {
    /// Key the associated records are nested under in results
    pub alias: String,
    /// Underlying type name of the associated record type
    pub class_name: String,
}

impl Association {
    pub fn new(alias: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            class_name: class_name.into(),
        }
    }
}

/// Associations grouped by kind
pub type Associations = BTreeMap<AssociationKind, Vec<Association>>;

/// What the behavior needs to know about a host record type
pub trait RecordType {
    /// Name the record type is addressed by in results and save data
    fn alias(&self) -> &str;

    /// Underlying type name, shared by every alias of the same type
    fn name(&self) -> &str;

    /// Declared associations, grouped by kind
    fn associations(&self) -> &Associations;
}

/// Serde-loadable record type description
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSchema {
    /// Underlying type name
    pub name: String,

    /// Alias; defaults to the name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    /// Declared associations
    #[serde(default)]
    pub associations: Associations,

    /// Per-type Serializable options
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serializable: Option<SerializableOptions>,
}

impl ModelSchema {
    /// Start building a schema for the given type name
    pub fn builder(name: impl Into<String>) -> ModelSchemaBuilder {
        ModelSchemaBuilder::new(name)
    }

    /// Load a single model schema from a JSON or YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Format::from_path(path).parse(&content)
    }
}

impl RecordType for ModelSchema {
    fn alias(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn associations(&self) -> &Associations {
        &self.associations
    }
}

/// Builder for creating model schemas programmatically
pub struct ModelSchemaBuilder {
    schema: ModelSchema,
}

impl ModelSchemaBuilder {
    /// Create a new schema builder
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            schema: ModelSchema {
                name: name.into(),
                alias: None,
                associations: Associations::new(),
                serializable: None,
            },
        }
    }

    /// Set the alias
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.schema.alias = Some(alias.into());
        self
    }

    /// Declare an association
    pub fn association(
        mut self,
        kind: AssociationKind,
        alias: impl Into<String>,
        class_name: impl Into<String>,
    ) -> Self {
        self.schema
            .associations
            .entry(kind)
            .or_default()
            .push(Association::new(alias, class_name));
        self
    }

    /// Attach per-type Serializable options
    pub fn serializable(mut self, options: SerializableOptions) -> Self {
        self.schema.serializable = Some(options);
        self
    }

    /// Build the schema
    pub fn build(self) -> ModelSchema {
        self.schema
    }
}

/// A document describing several models
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaDocument {
    #[serde(default)]
    pub models: Vec<ModelSchema>,
}

impl SchemaDocument {
    /// Load a schema document from a JSON or YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Format::from_path(path).parse(&content)
    }

    /// Find a model by alias, falling back to its type name
    pub fn model(&self, alias: &str) -> Result<&ModelSchema> {
        self.models
            .iter()
            .find(|model| model.alias() == alias)
            .or_else(|| self.models.iter().find(|model| model.name() == alias))
            .ok_or_else(|| Error::configuration(format!("Model '{}' is not declared in the schema", alias)))
    }
}
