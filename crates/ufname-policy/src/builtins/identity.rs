//! Pass-through policy.

use ufname_core::{NameContext, PolicyConfig, Result};

use crate::policy::NamingPolicy;

/// Returns the base name unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityPolicy;

impl IdentityPolicy {
    /// Registry tag.
    pub const TYPE_TAG: &'static str = "identity";

    /// No fields to read; never fails.
    pub fn from_config(_config: &PolicyConfig) -> Result<Self> {
        Ok(Self)
    }
}

impl NamingPolicy for IdentityPolicy {
    fn type_tag(&self) -> &'static str {
        Self::TYPE_TAG
    }

    fn generate(&self, ctx: &NameContext) -> Result<String> {
        Ok(ctx.base().to_string())
    }

    fn to_config(&self) -> PolicyConfig {
        PolicyConfig::new(Self::TYPE_TAG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_base() {
        let ctx = NameContext::new("test", ".txt");
        assert_eq!(IdentityPolicy.generate(&ctx).unwrap(), "test");
    }

    #[test]
    fn config_has_only_type() {
        let cfg = IdentityPolicy.to_config();
        assert_eq!(cfg.as_map().len(), 1);
        assert_eq!(cfg.type_tag(), Some("identity"));
    }

    #[test]
    fn extra_fields_are_ignored() {
        let cfg = PolicyConfig::new("identity").with("unused", true);
        assert_eq!(IdentityPolicy::from_config(&cfg).unwrap(), IdentityPolicy);
    }
}
