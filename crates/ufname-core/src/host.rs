//! # Host Identity
//!
//! The [`HostIdentity`] contract supplies the machine name used by
//! hostname-tagging policies.

/// Source of the local machine's name.
pub trait HostIdentity: Send + Sync + std::fmt::Debug {
    /// The host name as reported by the operating system.
    fn hostname(&self) -> String;
}

/// Reads the name from the operating system on every call.
///
/// Names that are not valid UTF-8 are converted lossily.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHost;

impl HostIdentity for SystemHost {
    fn hostname(&self) -> String {
        gethostname::gethostname().to_string_lossy().into_owned()
    }
}

/// A fixed host name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedHost(String);

impl FixedHost {
    /// Always report `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl HostIdentity for FixedHost {
    fn hostname(&self) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_host_is_nonempty() {
        assert!(!SystemHost.hostname().is_empty());
    }

    #[test]
    fn fixed_host_returns_name() {
        assert_eq!(FixedHost::new("build-01.example.org").hostname(), "build-01.example.org");
    }
}
