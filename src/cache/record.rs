//! NDJSON record codec for the definition cache
//!
//! Each cache record is one line holding a two-element JSON array
//! `[key, payload]`. The payload is the serialized model, `null` for a
//! cached negative, or an alias marker `{"$alias": "word"}` redirecting
//! to a canonical entry.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Object key marking an alias payload
const ALIAS_MARKER: &str = "$alias";

/// A single cached value as stored in the record stream
#[derive(Debug, Clone, PartialEq)]
pub enum CacheValue<M> {
    /// A fully resolved definition payload
    Entry(M),

    /// A confirmed "no definition exists" result
    Negative,

    /// A redirect to the canonical entry for another spelling
    Alias(String),
}

/// Error type for record encoding/decoding
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("malformed record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("alias marker must map to a string")]
    BadAlias,
}

/// Encode one record as a single NDJSON line (without the trailing
/// newline). serde_json escapes control characters, so the output never
/// contains a raw line break.
pub fn encode_line<M: Serialize>(key: &str, value: &CacheValue<M>) -> Result<String, RecordError> {
    let payload = match value {
        CacheValue::Entry(model) => serde_json::to_value(model)?,
        CacheValue::Negative => Value::Null,
        CacheValue::Alias(word) => serde_json::json!({ ALIAS_MARKER: word }),
    };

    Ok(serde_json::to_string(&(key, payload))?)
}

/// Decode one NDJSON line into a `(key, value)` pair.
///
/// A structurally invalid line is a hard error; callers abort the whole
/// stream rather than skipping bad lines.
pub fn decode_line<M: DeserializeOwned>(line: &str) -> Result<(String, CacheValue<M>), RecordError> {
    let (key, payload): (String, Value) = serde_json::from_str(line)?;

    let value = match payload {
        Value::Null => CacheValue::Negative,
        Value::Object(ref map) if map.len() == 1 && map.contains_key(ALIAS_MARKER) => {
            match map.get(ALIAS_MARKER) {
                Some(Value::String(word)) => CacheValue::Alias(word.clone()),
                _ => return Err(RecordError::BadAlias),
            }
        }
        other => CacheValue::Entry(serde_json::from_value(other)?),
    };

    Ok((key, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestModel {
        word: String,
        senses: Vec<String>,
    }

    fn sample() -> TestModel {
        TestModel {
            word: "cat".to_string(),
            senses: vec!["a small domesticated felid".to_string()],
        }
    }

    #[test]
    fn test_round_trip_entry() {
        let line = encode_line("cat", &CacheValue::Entry(sample())).unwrap();
        let (key, value) = decode_line::<TestModel>(&line).unwrap();
        assert_eq!(key, "cat");
        assert_eq!(value, CacheValue::Entry(sample()));
    }

    #[test]
    fn test_round_trip_negative() {
        let line = encode_line::<TestModel>("xyzzy", &CacheValue::Negative).unwrap();
        let (key, value) = decode_line::<TestModel>(&line).unwrap();
        assert_eq!(key, "xyzzy");
        assert_eq!(value, CacheValue::Negative);
    }

    #[test]
    fn test_round_trip_alias() {
        let line = encode_line::<TestModel>("cats", &CacheValue::Alias("cat".to_string())).unwrap();
        let (key, value) = decode_line::<TestModel>(&line).unwrap();
        assert_eq!(key, "cats");
        assert_eq!(value, CacheValue::Alias("cat".to_string()));
    }

    #[test]
    fn test_encoded_line_has_no_raw_newline() {
        let model = TestModel {
            word: "multi\nline".to_string(),
            senses: vec![],
        };
        let line = encode_line("multi\nline", &CacheValue::Entry(model)).unwrap();
        assert!(!line.contains('\n'));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_line::<TestModel>("not json at all").is_err());
        assert!(decode_line::<TestModel>("{\"key\": \"not a pair\"}").is_err());
        assert!(decode_line::<TestModel>("[\"only-key\"]").is_err());
    }

    #[test]
    fn test_decode_rejects_non_string_alias() {
        let result = decode_line::<TestModel>("[\"cats\", {\"$alias\": 42}]");
        assert!(matches!(result, Err(RecordError::BadAlias)));
    }

    #[test]
    fn test_alias_marker_with_extra_keys_is_a_model() {
        // Two keys means this is a payload for the model type, not an
        // alias marker. For TestModel it fails to deserialize.
        let result = decode_line::<TestModel>("[\"cats\", {\"$alias\": \"cat\", \"x\": 1}]");
        assert!(result.is_err());
    }
}
