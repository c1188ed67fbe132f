//! # Filename Builder
//!
//! The entry point callers use: wrap the inputs in a [`NameContext`], run
//! one policy (usually a composite) over it, and append the extension.
//! The builder performs no registry lookup; resolve configs first with
//! [`PolicyRegistry`](crate::registry::PolicyRegistry).

use std::path::{Path, PathBuf};

use serde_json::Value;
use ufname_core::{Metadata, NameContext, Result};

use crate::policy::NamingPolicy;

/// Build a filename: `policy.generate(ctx) + ext`.
///
/// `metadata` defaults to an empty mapping and `directory` to unset.
///
/// ```
/// use ufname_policy::{build_filename, PrefixPolicy};
///
/// let name = build_filename(&PrefixPolicy::new("draft_"), "report", ".md", None, None)?;
/// assert_eq!(name, "draft_report.md");
/// # Ok::<(), ufname_policy::NamingError>(())
/// ```
pub fn build_filename<P>(
    policy: &P,
    base: &str,
    ext: &str,
    directory: Option<&Path>,
    metadata: Option<Metadata>,
) -> Result<String>
where
    P: NamingPolicy + ?Sized,
{
    let mut request = FilenameRequest::new(base, ext);
    if let Some(directory) = directory {
        request = request.directory(directory);
    }
    if let Some(metadata) = metadata {
        request = request.metadata(metadata);
    }
    request.build(policy)
}

/// Owned builder form of [`build_filename`], for call sites that assemble
/// inputs incrementally.
#[derive(Debug, Clone, Default)]
pub struct FilenameRequest {
    base: String,
    ext: String,
    directory: Option<PathBuf>,
    metadata: Metadata,
}

impl FilenameRequest {
    /// A request with no directory and empty metadata.
    pub fn new(base: impl Into<String>, ext: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            ext: ext.into(),
            directory: None,
            metadata: Metadata::new(),
        }
    }

    /// Set the destination directory.
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// Replace all metadata.
    pub fn metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Add or overwrite one metadata entry.
    pub fn insert_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// The initial context a policy will see.
    pub fn context(&self) -> NameContext {
        let ctx = NameContext::new(self.base.as_str(), self.ext.as_str())
            .with_metadata(self.metadata.clone());
        match &self.directory {
            Some(directory) => ctx.with_directory(directory.as_path()),
            None => ctx,
        }
    }

    /// Run `policy` and append the extension.
    pub fn build<P>(&self, policy: &P) -> Result<String>
    where
        P: NamingPolicy + ?Sized,
    {
        let base = policy.generate(&self.context())?;
        Ok(format!("{base}{}", self.ext))
    }
}
