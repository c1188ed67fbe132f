//! # Naming Context
//!
//! The value threaded through a policy chain. A context carries the current
//! base name, the target extension, an optional destination directory, and
//! an arbitrary metadata mapping.
//!
//! ## Invariants
//!
//! - `ext` is set once, by the caller, and never changes along a chain. When
//!   non-empty it includes its leading separator (`".txt"`, not `"txt"`).
//! - `directory` and `metadata` are shared, not copied, between the steps
//!   of a chain.
//! - Only `base` changes, and only through [`NameContext::with_base`], which
//!   returns a new value.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;

/// Arbitrary key-value metadata available to policies.
///
/// A `BTreeMap` so iteration order is stable.
pub type Metadata = BTreeMap<String, Value>;

/// Immutable input to a single policy step.
#[derive(Debug, Clone, PartialEq)]
pub struct NameContext {
    base: String,
    ext: String,
    directory: Option<Arc<Path>>,
    metadata: Arc<Metadata>,
}

impl NameContext {
    /// Create a context with no directory and empty metadata.
    pub fn new(base: impl Into<String>, ext: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            ext: ext.into(),
            directory: None,
            metadata: Arc::new(Metadata::new()),
        }
    }

    /// Set the destination directory.
    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(Arc::from(directory.into()));
        self
    }

    /// Replace the metadata mapping.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Arc::new(metadata);
        self
    }

    /// Return a new context identical to this one except for `base`.
    ///
    /// Directory and metadata are shared with `self`. No validation is
    /// performed; each policy validates what it needs.
    pub fn with_base(&self, base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            ext: self.ext.clone(),
            directory: self.directory.clone(),
            metadata: Arc::clone(&self.metadata),
        }
    }

    /// The current base name, without extension.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The target extension, including its leading separator.
    pub fn ext(&self) -> &str {
        &self.ext
    }

    /// The destination directory, if any.
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    /// The metadata mapping.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Look up a metadata value, treating JSON `null` as absent.
    pub fn metadata_value(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key).filter(|v| !v.is_null())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NameContext {
        let mut metadata = Metadata::new();
        metadata.insert("id".to_string(), serde_json::json!(7));
        NameContext::new("report", ".csv")
            .with_directory("/tmp/out")
            .with_metadata(metadata)
    }

    #[test]
    fn with_base_replaces_only_base() {
        let ctx = sample();
        let next = ctx.with_base("report_v2");
        assert_eq!(next.base(), "report_v2");
        assert_eq!(next.ext(), ".csv");
        assert_eq!(next.directory(), Some(Path::new("/tmp/out")));
        assert_eq!(next.metadata(), ctx.metadata());
    }

    #[test]
    fn with_base_leaves_original_untouched() {
        let ctx = sample();
        let _ = ctx.with_base("other");
        assert_eq!(ctx.base(), "report");
    }

    #[test]
    fn with_base_shares_metadata() {
        let ctx = sample();
        let next = ctx.with_base("x");
        assert!(Arc::ptr_eq(&ctx.metadata, &next.metadata));
    }

    #[test]
    fn defaults_are_empty() {
        let ctx = NameContext::new("a", "");
        assert!(ctx.directory().is_none());
        assert!(ctx.metadata().is_empty());
        assert_eq!(ctx.ext(), "");
    }

    #[test]
    fn null_metadata_is_absent() {
        let mut metadata = Metadata::new();
        metadata.insert("k".to_string(), Value::Null);
        let ctx = NameContext::new("a", ".b").with_metadata(metadata);
        assert!(ctx.metadata_value("k").is_none());
        assert!(ctx.metadata_value("missing").is_none());
    }
}
