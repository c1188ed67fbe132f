//! # Policy Configuration
//!
//! [`PolicyConfig`] is the serialized form of a naming policy: a JSON object
//! with a mandatory `type` field plus policy-specific fields. Composite
//! policies nest child configs under `policies`.
//!
//! ```json
//! { "type": "composite",
//!   "policies": [ { "type": "prefix", "prefix": "nightly_" },
//!                 { "type": "timestamp", "fmt": "%Y%m%d" } ] }
//! ```
//!
//! Configs are exchanged as JSON or YAML text. Field order is not
//! significant; two configs are equal when their mappings are equal.
//!
//! The typed readers (`str_or`, `i64_or`, ...) implement the lenient side of
//! config handling: an absent or `null` field yields the default, while a
//! present field of the wrong JSON type is an `InvalidConfig` error.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{NamingError, Result};

/// Name of the field holding the policy type tag.
pub const TYPE_FIELD: &str = "type";

/// Serialized policy configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolicyConfig(Map<String, Value>);

impl PolicyConfig {
    /// Start a config for the given type tag.
    pub fn new(type_tag: &str) -> Self {
        let mut map = Map::new();
        map.insert(TYPE_FIELD.to_string(), Value::String(type_tag.to_string()));
        Self(map)
    }

    /// Wrap an existing JSON object without validation.
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Builder-style field insertion.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a field.
    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    /// The `type` tag, if present and a non-empty string.
    pub fn type_tag(&self) -> Option<&str> {
        self.0
            .get(TYPE_FIELD)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Raw access to a field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The underlying JSON object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume into a `serde_json::Value::Object`.
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    // ── Text formats ────────────────────────────────────────────────────

    /// Parse a config from JSON text.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(s)?;
        Self::try_from(value)
    }

    /// Parse a config from YAML text.
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let value: Value = serde_yaml::from_str(s)?;
        Self::try_from(value)
    }

    /// Render as compact JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.0)?)
    }

    /// Render as pretty-printed JSON.
    pub fn to_json_string_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.0)?)
    }

    /// Render as YAML.
    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&self.0)?)
    }

    // ── Typed field readers ─────────────────────────────────────────────

    fn present(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    fn wrong_type(&self, key: &str, expected: &str, found: &Value) -> NamingError {
        NamingError::invalid_config(
            self.type_tag().unwrap_or("<untyped>"),
            format!("field {key:?} must be {expected}, got {found}"),
        )
    }

    /// Read a string field, falling back to `default`.
    pub fn str_or(&self, key: &str, default: &str) -> Result<String> {
        match self.present(key) {
            None => Ok(default.to_string()),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(other) => Err(self.wrong_type(key, "a string", other)),
        }
    }

    /// Read an integer field, falling back to `default`.
    pub fn i64_or(&self, key: &str, default: i64) -> Result<i64> {
        Ok(self.optional_i64(key)?.unwrap_or(default))
    }

    /// Read an optional integer field.
    pub fn optional_i64(&self, key: &str) -> Result<Option<i64>> {
        match self.present(key) {
            None => Ok(None),
            Some(v) => v
                .as_i64()
                .map(Some)
                .ok_or_else(|| self.wrong_type(key, "an integer", v)),
        }
    }

    /// Read a boolean field, falling back to `default`.
    pub fn bool_or(&self, key: &str, default: bool) -> Result<bool> {
        match self.present(key) {
            None => Ok(default),
            Some(Value::Bool(b)) => Ok(*b),
            Some(other) => Err(self.wrong_type(key, "a boolean", other)),
        }
    }

    /// Read an array of nested configs. Absent means empty.
    pub fn configs(&self, key: &str) -> Result<Vec<PolicyConfig>> {
        match self.present(key) {
            None => Ok(Vec::new()),
            Some(Value::Array(items)) => items
                .iter()
                .cloned()
                .map(PolicyConfig::try_from)
                .collect(),
            Some(other) => Err(self.wrong_type(key, "an array of policy configs", other)),
        }
    }
}

impl TryFrom<Value> for PolicyConfig {
    type Error = NamingError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(NamingError::invalid_config(
                "<untyped>",
                format!("policy config must be an object, got {other}"),
            )),
        }
    }
}

impl From<PolicyConfig> for Value {
    fn from(config: PolicyConfig) -> Self {
        config.into_value()
    }
}

impl From<Vec<PolicyConfig>> for PolicyConfig {
    /// Shorthand for a composite config over the given children.
    fn from(children: Vec<PolicyConfig>) -> Self {
        let policies: Vec<Value> = children.into_iter().map(Value::from).collect();
        PolicyConfig::new("composite").with("policies", policies)
    }
}
