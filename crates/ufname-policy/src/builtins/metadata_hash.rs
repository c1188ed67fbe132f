//! Metadata digest policy.

use ufname_core::{CanonicalBytes, HashAlgorithm, NameContext, NamingError, PolicyConfig, Result};

use crate::policy::NamingPolicy;

/// Appends `_<digest prefix>` computed over the canonical JSON form of
/// `metadata[key]`. When the key is absent (or null) the base passes
/// through unchanged.
///
/// `length` is clamped to the digest's hex length, so a request for more
/// characters than the algorithm produces yields the whole digest.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataHashPolicy {
    key: String,
    algo: String,
    algorithm: HashAlgorithm,
    length: usize,
}

impl MetadataHashPolicy {
    /// Registry tag.
    pub const TYPE_TAG: &'static str = "metadata_hash";
    /// Metadata key hashed when `key` is not configured.
    pub const DEFAULT_KEY: &'static str = "params";
    /// Algorithm used when `algo` is not configured.
    pub const DEFAULT_ALGO: &'static str = "sha256";
    /// Digest prefix length used when `length` is not configured.
    pub const DEFAULT_LENGTH: usize = 16;

    /// # Errors
    ///
    /// - `UnknownAlgorithm` if `algo` names no supported digest.
    /// - `InvalidConfig` if `length` is zero.
    pub fn new(key: impl Into<String>, algo: impl Into<String>, length: usize) -> Result<Self> {
        let algo = algo.into();
        let algorithm = algo.parse::<HashAlgorithm>()?;
        if length == 0 {
            return Err(NamingError::invalid_config(
                Self::TYPE_TAG,
                "length must be positive",
            ));
        }
        Ok(Self {
            key: key.into(),
            algo,
            algorithm,
            length,
        })
    }

    /// Reads `key` (default `"params"`), `algo` (default `"sha256"`), and
    /// `length` (default 16).
    pub fn from_config(config: &PolicyConfig) -> Result<Self> {
        let length = config.i64_or("length", Self::DEFAULT_LENGTH as i64)?;
        let length = usize::try_from(length).map_err(|_| {
            NamingError::invalid_config(
                Self::TYPE_TAG,
                format!("length must be positive, got {length}"),
            )
        })?;
        Self::new(
            config.str_or("key", Self::DEFAULT_KEY)?,
            config.str_or("algo", Self::DEFAULT_ALGO)?,
            length,
        )
    }

    /// The metadata key whose value is hashed.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The parsed digest algorithm.
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Requested digest prefix length in hex characters.
    pub fn length(&self) -> usize {
        self.length
    }
}

impl NamingPolicy for MetadataHashPolicy {
    fn type_tag(&self) -> &'static str {
        Self::TYPE_TAG
    }

    fn generate(&self, ctx: &NameContext) -> Result<String> {
        let Some(value) = ctx.metadata_value(&self.key) else {
            tracing::trace!(key = %self.key, "metadata key absent, base unchanged");
            return Ok(ctx.base().to_string());
        };
        let canonical = CanonicalBytes::new(value)?;
        let mut digest = self.algorithm.hex_digest(&canonical);
        digest.truncate(self.length.min(digest.len()));
        Ok(format!("{}_{}", ctx.base(), digest))
    }

    fn to_config(&self) -> PolicyConfig {
        PolicyConfig::new(Self::TYPE_TAG)
            .with("key", self.key.as_str())
            .with("algo", self.algo.as_str())
            .with("length", self.length)
    }
}
