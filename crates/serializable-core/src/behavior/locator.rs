//! Recursive field locator for fetched result trees
//!
//! Results are `serde_json::Value` trees. Objects are mappings keyed by name,
//! arrays are mappings keyed by index, everything else is a scalar. For one
//! row and one field the locator tries, in order:
//!
//! 1. the field as a direct key of the row,
//! 2. the row itself, when the key it sits under is the field name,
//! 3. every known alias of the record type: the field directly under the
//!    alias, or else each entry of the aliased mapping, recursively.
//!
//! Copyright (c) 2025 Serializable Team
//! Licensed under the Apache-2.0 license

use crate::config::Settings;
use crate::Result;
use serde_json::Value;

/// Key a row sits under in its parent mapping
///
/// Names and indices never compare equal, so an array entry can not
/// match a field whose name happens to be numeric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKey<'a> {
    Name(&'a str),
    Index(usize),
}

/// True when a key exists and holds something other than null
pub(crate) fn is_set(value: Option<&Value>) -> bool {
    matches!(value, Some(v) if !v.is_null())
}

/// Mutable access to a set entry of an object
pub(crate) fn set_entry_mut<'a>(row: &'a mut Value, field: &str) -> Option<&'a mut Value> {
    row.as_object_mut()
        .and_then(|map| map.get_mut(field))
        .filter(|value| !value.is_null())
}

/// Entries of a mapping; scalars have none
pub(crate) fn entries_mut(value: &mut Value) -> Vec<(RowKey<'_>, &mut Value)> {
    match value {
        Value::Object(map) => map
            .iter_mut()
            .map(|(key, row)| (RowKey::Name(key.as_str()), row))
            .collect(),
        Value::Array(rows) => rows
            .iter_mut()
            .enumerate()
            .map(|(index, row)| (RowKey::Index(index), row))
            .collect(),
        _ => Vec::new(),
    }
}

/// Decodes one configured field wherever it appears in a row
pub(crate) struct FieldLocator<'a> {
    settings: &'a Settings,
    alias: &'a str,
    aliases: &'a [String],
}

impl<'a> FieldLocator<'a> {
    pub(crate) fn new(settings: &'a Settings, alias: &'a str, aliases: &'a [String]) -> Self {
        Self {
            settings,
            alias,
            aliases,
        }
    }

    pub(crate) fn decode_field(&self, field: &str, key: RowKey<'_>, row: &mut Value) -> Result<()> {
        if let Some(slot) = set_entry_mut(row, field) {
            return self.decode_slot(field, slot);
        }

        if key == RowKey::Name(field) {
            return self.decode_slot(field, row);
        }

        for alias in self.aliases {
            let Some(nested) = row.get_mut(alias.as_str()) else {
                continue;
            };

            if let Some(slot) = set_entry_mut(nested, field) {
                self.decode_slot(field, slot)?;
            } else if nested.is_object() || nested.is_array() {
                for (nested_key, nested_row) in entries_mut(nested) {
                    self.decode_field(field, nested_key, nested_row)?;
                }
            }
        }

        Ok(())
    }

    /// Decode a stored string in place; anything else is already decoded
    fn decode_slot(&self, field: &str, slot: &mut Value) -> Result<()> {
        if let Value::String(stored) = slot {
            let decoded = self.settings.decode(self.alias, stored)?;
            log::trace!("Decoded field '{}' for '{}'", field, self.alias);
            *slot = decoded;
        }
        Ok(())
    }
}
