//! Property-based testing strategies for generating test data
//!
//! This module provides proptest strategies for generating in-memory field
//! values and result rows for property testing.

#![cfg(test)]

use proptest::collection::{hash_map, vec};
use proptest::prelude::*;
use serde_json::{Map, Value};

/// Strategy for scalar values; floats are left out so JSON round-trips exactly
pub fn json_leaf_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-zA-Z0-9 _.-]{0,16}".prop_map(Value::String),
    ]
}

/// Strategy for arbitrary nested values
pub fn json_value_strategy() -> impl Strategy<Value = Value> {
    json_leaf_strategy().prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            vec(inner.clone(), 0..4).prop_map(Value::Array),
            hash_map("[a-z_]{1,8}", inner, 0..4)
                .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

/// Strategy for values already in decoded form (anything but a string)
pub fn decoded_value_strategy() -> impl Strategy<Value = Value> {
    json_value_strategy().prop_filter("stored values are strings", |value| !value.is_string())
}

/// Strategy for a result set of `{alias: {field: value}}` rows
pub fn result_rows_strategy(alias: &'static str, field: &'static str) -> impl Strategy<Value = Vec<Value>> {
    vec(json_value_strategy(), 0..6).prop_map(move |values| {
        values
            .into_iter()
            .map(|value| {
                let mut row = Map::new();
                row.insert(field.to_string(), value);
                let mut wrapper = Map::new();
                wrapper.insert(alias.to_string(), Value::Object(row));
                Value::Object(wrapper)
            })
            .collect()
    })
}
