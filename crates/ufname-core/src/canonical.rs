//! # Canonical Serialization: Deterministic Metadata Bytes
//!
//! This module defines `CanonicalBytes`, the byte sequence hashed by
//! metadata-derived naming policies.
//!
//! ## Invariant
//!
//! Logically equal values produce identical bytes, across runs and across
//! processes. A map built in one insertion order hashes the same as the
//! same map built in another.
//!
//! Serialization uses `serde_jcs` for RFC 8785 (JSON Canonicalization
//! Scheme) output: sorted keys, compact separators, ECMAScript number
//! rendering. Strings are emitted as JSON string literals, so the string
//! `"12345"` and the integer `12345` canonicalize differently.

use serde::Serialize;
use serde_json::Value;

use crate::error::CanonicalizationError;

/// Bytes produced exclusively by JCS canonicalization.
///
/// The inner `Vec<u8>` is private; the only constructor is
/// [`CanonicalBytes::new()`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    /// Construct canonical bytes from any serializable value.
    ///
    /// # Errors
    ///
    /// Returns `CanonicalizationError::SerializationFailed` if the value
    /// cannot be represented as JSON (e.g. a map with non-string keys).
    pub fn new(obj: &impl Serialize) -> Result<Self, CanonicalizationError> {
        let value = serde_json::to_value(obj)?;
        let bytes = serialize_canonical(&value)?;
        Ok(Self(bytes))
    }

    /// Access the canonical bytes for digest computation.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the length of the canonical byte sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the canonical byte sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

fn serialize_canonical(value: &Value) -> Result<Vec<u8>, CanonicalizationError> {
    let s = serde_jcs::to_string(value)?;
    Ok(s.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical_str(value: &Value) -> String {
        let cb = CanonicalBytes::new(value).expect("should canonicalize");
        String::from_utf8(cb.as_bytes().to_vec()).unwrap()
    }

    #[test]
    fn test_sorted_keys() {
        let data = serde_json::json!({"z": 1, "m": 2, "a": 3});
        assert_eq!(canonical_str(&data), r#"{"a":3,"m":2,"z":1}"#);
    }

    #[test]
    fn test_nested_objects_sorted() {
        let data = serde_json::json!({
            "outer": {"b": 2, "a": 1},
            "list": [3, 2, 1]
        });
        assert_eq!(canonical_str(&data), r#"{"list":[3,2,1],"outer":{"a":1,"b":2}}"#);
    }

    #[test]
    fn test_array_order_preserved() {
        let data = serde_json::json!(["b", "a"]);
        assert_eq!(canonical_str(&data), r#"["b","a"]"#);
    }

    #[test]
    fn test_integer() {
        assert_eq!(canonical_str(&serde_json::json!(12345)), "12345");
    }

    #[test]
    fn test_float_accepted() {
        assert_eq!(canonical_str(&serde_json::json!({"ratio": 1.5})), r#"{"ratio":1.5}"#);
    }

    #[test]
    fn test_string_is_quoted() {
        let cb = CanonicalBytes::new(&"hello world").unwrap();
        assert_eq!(cb.as_bytes(), b"\"hello world\"");
    }

    #[test]
    fn test_string_and_integer_differ() {
        let s = CanonicalBytes::new(&"12345").unwrap();
        let i = CanonicalBytes::new(&12345).unwrap();
        assert_ne!(s, i);
    }

    #[test]
    fn test_empty_object() {
        let cb = CanonicalBytes::new(&serde_json::json!({})).unwrap();
        assert_eq!(cb.as_bytes(), b"{}");
        assert_eq!(cb.len(), 2);
        assert!(!cb.is_empty());
    }

    #[test]
    fn test_non_string_map_keys_rejected() {
        let mut map = std::collections::HashMap::new();
        map.insert(vec![1u8], 1);
        assert!(CanonicalBytes::new(&map).is_err());
    }
}
