//! Built-in codecs
//!
//! JSON is the default stored representation. YAML is provided for schemas
//! that keep human-edited documents in a text column.
//!
//! Copyright (c) 2025 Serializable Team
//! Licensed under the Apache-2.0 license

use super::{CodecResult, Decode, Encode};
use serde_json::Value;

/// Compact JSON codec, the default for every record type
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Encode for JsonCodec {
    fn encode(&self, value: &Value) -> CodecResult<String> {
        Ok(serde_json::to_string(value)?)
    }
}

impl Decode for JsonCodec {
    fn decode(&self, stored: &str) -> CodecResult<Value> {
        Ok(serde_json::from_str(stored)?)
    }
}

/// JSON codec that writes indented output
#[derive(Debug, Clone, Copy, Default)]
pub struct PrettyJsonCodec;

impl Encode for PrettyJsonCodec {
    fn encode(&self, value: &Value) -> CodecResult<String> {
        Ok(serde_json::to_string_pretty(value)?)
    }
}

impl Decode for PrettyJsonCodec {
    fn decode(&self, stored: &str) -> CodecResult<Value> {
        JsonCodec.decode(stored)
    }
}

/// YAML codec
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlCodec;

impl Encode for YamlCodec {
    fn encode(&self, value: &Value) -> CodecResult<String> {
        Ok(serde_yaml::to_string(value)?)
    }
}

impl Decode for YamlCodec {
    fn decode(&self, stored: &str) -> CodecResult<Value> {
        Ok(serde_yaml::from_str(stored)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_round_trip() {
        let value = json!({"x": 1, "tags": ["a", "b"], "nested": {"ok": true}});
        let stored = JsonCodec.encode(&value).unwrap();
        assert_eq!(stored, r#"{"nested":{"ok":true},"tags":["a","b"],"x":1}"#);
        assert_eq!(JsonCodec.decode(&stored).unwrap(), value);
    }

    #[test]
    fn test_json_decode_rejects_garbage() {
        assert!(JsonCodec.decode("a:1:{").is_err());
    }

    #[test]
    fn test_pretty_json_is_readable_by_json() {
        let value = json!({"x": [1, 2]});
        let stored = PrettyJsonCodec.encode(&value).unwrap();
        assert!(stored.contains('\n'));
        assert_eq!(JsonCodec.decode(&stored).unwrap(), value);
    }

    #[test]
    fn test_yaml_round_trip() {
        let value = json!({"name": "root", "depth": 0});
        let stored = YamlCodec.encode(&value).unwrap();
        assert!(stored.contains("name: root"));
        assert_eq!(YamlCodec.decode(&stored).unwrap(), value);
    }
}
