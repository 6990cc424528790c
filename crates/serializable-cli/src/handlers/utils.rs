//! Shared utilities for command handlers

use crate::cli::ModelArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use serde_json::Value;
use serializable_core::{Format, ModelSchema, SchemaDocument, SerializableBehavior};
use std::fs;
use std::path::Path;

/// A behavior set up for every model of a schema document
pub struct Harness {
    pub schema: SchemaDocument,
    pub behavior: SerializableBehavior,
}

impl Harness {
    /// Load the schema document and set up each of its models
    pub fn load(args: &ModelArgs, config: &Config) -> Result<Self> {
        if !args.schema.exists() {
            return Err(Error::FileNotFound {
                path: args.schema.clone(),
            });
        }

        let schema = SchemaDocument::from_file(&args.schema)?;
        let mut behavior = SerializableBehavior::new(config.global.clone());
        for model in &schema.models {
            behavior.setup_from_schema(model);
        }

        tracing::debug!(
            schema = %args.schema.display(),
            models = schema.models.len(),
            "Schema loaded"
        );

        Ok(Self { schema, behavior })
    }

    /// The record type the command runs as
    pub fn model(&self, name: &str) -> Result<&ModelSchema> {
        Ok(self.schema.model(name)?)
    }
}

/// Load a JSON or YAML document as a value tree
pub fn load_document(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    let format = Format::from_path(path);

    format.parse(&content).map_err(|_| Error::InvalidFormat {
        path: path.to_path_buf(),
        expected: match format {
            Format::Json => "JSON".to_string(),
            Format::Yaml => "YAML".to_string(),
        },
    })
}

/// Write a value tree to a file, in the format its extension names
pub fn save_document(path: &Path, value: &Value) -> Result<()> {
    let content = match Format::from_path(path) {
        Format::Json => serde_json::to_string_pretty(value)?,
        Format::Yaml => serde_yaml::to_string(value)?,
    };
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_document_formats() {
        let dir = TempDir::new().unwrap();
        let value = json!({"Item": {"data": "[1]"}});

        for name in ["doc.json", "doc.yaml"] {
            let path = dir.path().join(name);
            save_document(&path, &value).unwrap();
            assert_eq!(load_document(&path).unwrap(), value);
        }
    }

    #[test]
    fn test_invalid_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.json");
        fs::write(&path, "{ nope").unwrap();

        let result = load_document(&path);
        assert!(matches!(result, Err(Error::InvalidFormat { ref expected, .. }) if expected == "JSON"));
    }

    #[test]
    fn test_missing_document() {
        let result = load_document(Path::new("/nonexistent/doc.yaml"));
        assert!(matches!(result, Err(Error::FileNotFound { .. })));
    }
}
