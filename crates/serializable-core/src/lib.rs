//! Serializable Core - transparent field serialization for ORM record types
//!
//! This crate provides a behavior that a host ORM invokes around reads and
//! writes. After a fetch, designated fields are decoded from their stored
//! string form; before a save they are encoded back.
//!
//! # Main Components
//!
//! - **Error Handling**: Error types using `thiserror` and `anyhow`
//! - **Codecs**: Pluggable encode/decode strategies and a name registry
//! - **Schema**: What the behavior needs to know about host record types
//! - **Configuration**: Layered options (defaults, global block, per type)
//! - **Behavior**: Lifecycle hooks and the nested field locator
//!
//! # Example
//!
//! ```
//! use serializable_core::{
//!     AssociationKind, GlobalConfig, ModelSchema, Result, SerializableBehavior,
//!     SerializableOptions,
//! };
//! use serde_json::json;
//!
//! fn example() -> Result<()> {
//!     let category = ModelSchema::builder("Category")
//!         .association(AssociationKind::HasMany, "Children", "Category")
//!         .build();
//!
//!     let mut behavior = SerializableBehavior::new(GlobalConfig::default());
//!     behavior.setup(&category, SerializableOptions::new().fields(["data"]));
//!
//!     let mut results = json!([
//!         {"Category": {"data": "[1]"}, "Children": [{"data": "[2]"}]}
//!     ]);
//!     behavior.after_fetch(&category, &mut results)?;
//!     assert_eq!(results[0]["Children"][0]["data"], json!([2]));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod behavior;
pub mod codec;
pub mod config;
pub mod error;
pub mod schema;

#[cfg(test)]
mod proptest_strategies;

// Re-export main types for convenience
pub use behavior::{resolve_aliases, ModelBehavior, RowKey, SerializableBehavior};
pub use codec::{
    CodecError, CodecRef, CodecRegistry, CodecResult, Decode, DecoderRef, Encode, EncoderRef,
    JsonCodec, PrettyJsonCodec, YamlCodec,
};
pub use config::{Format, GlobalConfig, SerializableOptions, Settings, NAMESPACE};
pub use error::{Error, Result};
pub use schema::{
    Association, AssociationKind, Associations, ModelSchema, ModelSchemaBuilder, RecordType,
    SchemaDocument,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
