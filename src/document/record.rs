//! Parsed JSON records.
//!
//! A [`JsonRecord`] is one JSON object read from one file, together with its
//! `identifier` and the path it came from. Field access is schema-less: any
//! key may be asked for, and a missing key reads as the empty string.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::analysis::config::TokenizerConfig;
use crate::document::tokenize::{FieldTokens, tokenize_object};

/// The field holding a record's external identifier.
pub const IDENTIFIER_FIELD: &str = "identifier";

/// A JSON object parsed from a single file.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonRecord {
    path: PathBuf,
    identifier: String,
    object: Map<String, Value>,
}

impl JsonRecord {
    /// Wrap a parsed object, reading its identifier.
    pub fn new<P: Into<PathBuf>>(path: P, object: Map<String, Value>) -> Self {
        let identifier = field_text(&object, IDENTIFIER_FIELD);
        JsonRecord {
            path: path.into(),
            identifier,
            object,
        }
    }

    /// Wrap a parsed value, or return `None` when it is not a JSON object.
    pub fn from_value<P: Into<PathBuf>>(path: P, value: Value) -> Option<Self> {
        match value {
            Value::Object(object) => Some(JsonRecord::new(path, object)),
            _ => None,
        }
    }

    /// The value of the `identifier` field, or `""` when absent.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The file this record was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The top-level JSON object.
    pub fn object(&self) -> &Map<String, Value> {
        &self.object
    }

    /// Top-level keys in the object's natural order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.object.keys().map(String::as_str)
    }

    /// Get the raw value of a field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.object.get(field)
    }

    /// Get the string representation of a field, `""` when missing.
    pub fn field_text(&self, field: &str) -> String {
        field_text(&self.object, field)
    }

    pub fn is_empty(&self) -> bool {
        self.object.is_empty()
    }

    /// Tokenize this record with the given configuration.
    pub fn tokens<'a>(&'a self, config: &'a TokenizerConfig) -> FieldTokens<'a> {
        tokenize_object(&self.object, config)
    }

    /// Consume the record, returning the identifier and the object.
    pub fn into_parts(self) -> (String, Map<String, Value>) {
        (self.identifier, self.object)
    }
}

/// Read a field as text, treating a missing field as the empty string.
pub fn field_text(object: &Map<String, Value>, field: &str) -> String {
    object.get(field).map(value_text).unwrap_or_default()
}

/// Coerce any JSON value to text.
///
/// Strings are returned verbatim. Every other value uses its compact JSON
/// form, so `null` becomes `"null"`, `[1,"a"]` becomes `"[1,\"a\"]"` and so
/// on. Numbers keep serde_json's formatting: `1e20` reads as `"1e20"`, which
/// the default normalizer keeps as a single word.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn test_identifier() {
        let record = JsonRecord::new(
            "a.json",
            object(json!({"identifier": "doc-1", "title": "x"})),
        );
        assert_eq!(record.identifier(), "doc-1");
        assert_eq!(record.path(), Path::new("a.json"));

        let record = JsonRecord::new("b.json", object(json!({"title": "x"})));
        assert_eq!(record.identifier(), "");

        let record = JsonRecord::new("c.json", object(json!({"identifier": 42})));
        assert_eq!(record.identifier(), "42");
    }

    #[test]
    fn test_from_value_requires_object() {
        assert!(JsonRecord::from_value("a.json", json!({"k": 1})).is_some());
        assert!(JsonRecord::from_value("a.json", json!([1, 2])).is_none());
        assert!(JsonRecord::from_value("a.json", json!("text")).is_none());
        assert!(JsonRecord::from_value("a.json", Value::Null).is_none());
    }

    #[test]
    fn test_value_text() {
        assert_eq!(value_text(&json!("Hello")), "Hello");
        assert_eq!(value_text(&json!(null)), "null");
        assert_eq!(value_text(&json!(true)), "true");
        assert_eq!(value_text(&json!(3.5)), "3.5");
        assert_eq!(value_text(&json!(1e20)), "1e20");
        assert_eq!(value_text(&json!(["a", 1])), r#"["a",1]"#);
        assert_eq!(value_text(&json!({"k": "v"})), r#"{"k":"v"}"#);
    }

    #[test]
    fn test_field_text_missing_is_empty() {
        let record = JsonRecord::new("a.json", object(json!({"title": "T"})));
        assert_eq!(record.field_text("title"), "T");
        assert_eq!(record.field_text("body"), "");
        assert!(record.get("body").is_none());
    }

    #[test]
    fn test_keys_keep_source_order() {
        let value: Value = serde_json::from_str(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();
        let record = JsonRecord::from_value("a.json", value).unwrap();
        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_into_parts() {
        let record = JsonRecord::new("a.json", object(json!({"identifier": "x"})));
        assert!(!record.is_empty());
        let (identifier, object) = record.into_parts();
        assert_eq!(identifier, "x");
        assert_eq!(object.len(), 1);
    }
}
