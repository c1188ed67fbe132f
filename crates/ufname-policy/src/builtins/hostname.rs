//! Host name policy.

use std::sync::Arc;

use ufname_core::{HostIdentity, NameContext, PolicyConfig, Result, SystemHost};

use crate::policy::NamingPolicy;

/// Appends `_<hostname>`. With `short`, a fully qualified name is cut at
/// its first dot (`build-01.example.org` becomes `build-01`).
#[derive(Debug, Clone)]
pub struct HostnamePolicy {
    short: bool,
    host: Arc<dyn HostIdentity>,
}

impl HostnamePolicy {
    /// Registry tag.
    pub const TYPE_TAG: &'static str = "hostname";

    /// Read the system host name, cut at the first dot when `short`.
    pub fn new(short: bool) -> Self {
        Self {
            short,
            host: Arc::new(SystemHost),
        }
    }

    /// Reads `short` (default `true`).
    pub fn from_config(config: &PolicyConfig) -> Result<Self> {
        Ok(Self::new(config.bool_or("short", true)?))
    }

    /// Substitute the host identity source.
    pub fn with_host(mut self, host: Arc<dyn HostIdentity>) -> Self {
        self.host = host;
        self
    }

    /// True if the name is cut at its first dot.
    pub fn short(&self) -> bool {
        self.short
    }
}

impl Default for HostnamePolicy {
    fn default() -> Self {
        Self::new(true)
    }
}

impl NamingPolicy for HostnamePolicy {
    fn type_tag(&self) -> &'static str {
        Self::TYPE_TAG
    }

    fn generate(&self, ctx: &NameContext) -> Result<String> {
        let host = self.host.hostname();
        let host = match host.split_once('.') {
            Some((first, _)) if self.short => first,
            _ => host.as_str(),
        };
        Ok(format!("{}_{}", ctx.base(), host))
    }

    fn to_config(&self) -> PolicyConfig {
        PolicyConfig::new(Self::TYPE_TAG).with("short", self.short)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ufname_core::FixedHost;

    fn fqdn() -> Arc<dyn HostIdentity> {
        Arc::new(FixedHost::new("build-01.example.org"))
    }

    #[test]
    fn short_truncates_at_first_dot() {
        let policy = HostnamePolicy::new(true).with_host(fqdn());
        let name = policy.generate(&NameContext::new("test", ".log")).unwrap();
        assert_eq!(name, "test_build-01");
    }

    #[test]
    fn long_keeps_full_name() {
        let policy = HostnamePolicy::new(false).with_host(fqdn());
        let name = policy.generate(&NameContext::new("test", ".log")).unwrap();
        assert_eq!(name, "test_build-01.example.org");
    }

    #[test]
    fn short_without_dot_is_unchanged() {
        let policy = HostnamePolicy::new(true).with_host(Arc::new(FixedHost::new("laptop")));
        assert_eq!(policy.generate(&NameContext::new("t", "")).unwrap(), "t_laptop");
    }

    #[test]
    fn system_host() {
        let name = HostnamePolicy::default()
            .generate(&NameContext::new("test", ".txt"))
            .unwrap();
        assert!(name.starts_with("test_"));
        assert!(!name["test_".len()..].contains('.'));
    }

    #[test]
    fn config_defaults_to_short() {
        let policy = HostnamePolicy::from_config(&PolicyConfig::new("hostname")).unwrap();
        assert!(policy.short());
    }
}
