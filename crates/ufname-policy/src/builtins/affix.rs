//! Fixed-text prefix and suffix policies.

use ufname_core::{NameContext, PolicyConfig, Result};

use crate::policy::NamingPolicy;

/// Prepends a fixed string to the base name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixPolicy {
    prefix: String,
}

impl PrefixPolicy {
    /// Registry tag.
    pub const TYPE_TAG: &'static str = "prefix";

    /// Prepend `prefix`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Reads `prefix` (default `""`).
    pub fn from_config(config: &PolicyConfig) -> Result<Self> {
        Ok(Self::new(config.str_or("prefix", "")?))
    }

    /// The configured prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl NamingPolicy for PrefixPolicy {
    fn type_tag(&self) -> &'static str {
        Self::TYPE_TAG
    }

    fn generate(&self, ctx: &NameContext) -> Result<String> {
        Ok(format!("{}{}", self.prefix, ctx.base()))
    }

    fn to_config(&self) -> PolicyConfig {
        PolicyConfig::new(Self::TYPE_TAG).with("prefix", self.prefix.as_str())
    }
}

/// Appends a fixed string to the base name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuffixPolicy {
    suffix: String,
}

impl SuffixPolicy {
    /// Registry tag.
    pub const TYPE_TAG: &'static str = "suffix";

    /// Append `suffix`.
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    /// Reads `suffix` (default `""`).
    pub fn from_config(config: &PolicyConfig) -> Result<Self> {
        Ok(Self::new(config.str_or("suffix", "")?))
    }

    /// The configured suffix.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

impl NamingPolicy for SuffixPolicy {
    fn type_tag(&self) -> &'static str {
        Self::TYPE_TAG
    }

    fn generate(&self, ctx: &NameContext) -> Result<String> {
        Ok(format!("{}{}", ctx.base(), self.suffix))
    }

    fn to_config(&self) -> PolicyConfig {
        PolicyConfig::new(Self::TYPE_TAG).with("suffix", self.suffix.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_prepends() {
        let ctx = NameContext::new("test", ".txt");
        assert_eq!(PrefixPolicy::new("pre_").generate(&ctx).unwrap(), "pre_test");
    }

    #[test]
    fn suffix_appends() {
        let ctx = NameContext::new("test", ".txt");
        assert_eq!(SuffixPolicy::new("_suf").generate(&ctx).unwrap(), "test_suf");
    }

    #[test]
    fn missing_field_defaults_to_empty() {
        let prefix = PrefixPolicy::from_config(&PolicyConfig::new("prefix")).unwrap();
        assert_eq!(prefix.prefix(), "");
        let suffix = SuffixPolicy::from_config(&PolicyConfig::new("suffix")).unwrap();
        assert_eq!(suffix.suffix(), "");
    }

    #[test]
    fn non_string_field_rejected() {
        let cfg = PolicyConfig::new("prefix").with("prefix", 42);
        assert!(PrefixPolicy::from_config(&cfg).unwrap_err().is_invalid_config());
    }

    #[test]
    fn config_carries_text() {
        let cfg = SuffixPolicy::new("-final").to_config();
        assert_eq!(cfg.str_or("suffix", "").unwrap(), "-final");
        assert_eq!(SuffixPolicy::from_config(&cfg).unwrap(), SuffixPolicy::new("-final"));
    }
}
