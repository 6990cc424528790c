//! Alias resolution for self-referential record types
//!
//! A record type associated with itself (a tree's parent and children, for
//! instance) shows up in results under several names. The aliases searched
//! for nested fields are, in order and without duplicates:
//! - the record type's own alias
//! - aliases configured explicitly
//! - the alias of every association whose target type is the record type
//!
//! Copyright (c) 2025 Serializable Team
//! Licensed under the Apache-2.0 license

use crate::schema::RecordType;

/// Resolve every alias a record type can be nested under
pub fn resolve_aliases(model: &dyn RecordType, configured: &[String]) -> Vec<String> {
    let mut aliases: Vec<String> = Vec::new();
    let mut push = |alias: &str| {
        if !aliases.iter().any(|known| known == alias) {
            aliases.push(alias.to_string());
        }
    };

    push(model.alias());
    for alias in configured {
        push(alias.as_str());
    }

    for associations in model.associations().values() {
        for association in associations {
            if association.class_name == model.name() {
                push(association.alias.as_str());
            }
        }
    }

    aliases
}
