//! UUID policy.

use ufname_core::{NameContext, PolicyConfig, Result, UuidVersion};

use crate::policy::NamingPolicy;

/// Appends `_<uuid>` in canonical hyphenated lowercase form, freshly
/// generated on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UuidPolicy {
    version: UuidVersion,
}

impl UuidPolicy {
    /// Registry tag.
    pub const TYPE_TAG: &'static str = "uuid";

    /// Generate identifiers of `version`.
    pub fn new(version: UuidVersion) -> Self {
        Self { version }
    }

    /// Reads `version` (default 4). Anything but 1 or 4 is
    /// `UnsupportedVersion`.
    pub fn from_config(config: &PolicyConfig) -> Result<Self> {
        let version = UuidVersion::try_from(config.i64_or("version", 4)?)?;
        Ok(Self::new(version))
    }

    /// The configured UUID version.
    pub fn version(&self) -> UuidVersion {
        self.version
    }
}

impl Default for UuidPolicy {
    fn default() -> Self {
        Self::new(UuidVersion::V4)
    }
}

impl NamingPolicy for UuidPolicy {
    fn type_tag(&self) -> &'static str {
        Self::TYPE_TAG
    }

    fn generate(&self, ctx: &NameContext) -> Result<String> {
        Ok(format!("{}_{}", ctx.base(), self.version.generate()))
    }

    fn to_config(&self) -> PolicyConfig {
        PolicyConfig::new(Self::TYPE_TAG).with("version", self.version.as_i64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ufname_core::NamingError;

    #[test]
    fn appends_canonical_uuid() {
        let name = UuidPolicy::default()
            .generate(&NameContext::new("test", ".txt"))
            .unwrap();
        let id = name.strip_prefix("test_").unwrap();
        assert_eq!(id.len(), 36);
        assert_eq!(id.matches('-').count(), 4);
        assert_eq!(&id[14..15], "4");
    }

    #[test]
    fn version_one() {
        let policy = UuidPolicy::new(UuidVersion::V1);
        let name = policy.generate(&NameContext::new("a", "")).unwrap();
        assert_eq!(&name[2 + 14..2 + 15], "1");
    }

    #[test]
    fn fresh_per_call() {
        let policy = UuidPolicy::default();
        let ctx = NameContext::new("a", "");
        assert_ne!(policy.generate(&ctx).unwrap(), policy.generate(&ctx).unwrap());
    }

    #[test]
    fn unsupported_version_rejected() {
        let cfg = PolicyConfig::new("uuid").with("version", 3);
        match UuidPolicy::from_config(&cfg) {
            Err(NamingError::UnsupportedVersion(3)) => {}
            other => panic!("expected UnsupportedVersion, got {other:?}"),
        }
    }

    #[test]
    fn default_version_is_four() {
        let policy = UuidPolicy::from_config(&PolicyConfig::new("uuid")).unwrap();
        assert_eq!(policy.version(), UuidVersion::V4);
    }
}
