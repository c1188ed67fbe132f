//! # Composite Policy
//!
//! Chains child policies in declared order. Each child sees the context
//! produced by its predecessor: same extension, directory, and metadata,
//! with `base` replaced by the previous child's output. An empty chain
//! returns the input base unchanged.
//!
//! Children may themselves be composites. No depth limit is imposed.
//!
//! The first child error aborts the chain and is returned as-is; nothing
//! is written anywhere, so there is no partial state to undo.

use ufname_core::{NameContext, NamingError, PolicyConfig, Result};

use crate::policy::NamingPolicy;
use crate::registry::PolicyRegistry;

/// Config field holding the ordered child configs.
pub const POLICIES_FIELD: &str = "policies";

/// An ordered chain of policies.
#[derive(Debug, Default)]
pub struct CompositePolicy {
    policies: Vec<Box<dyn NamingPolicy>>,
}

impl CompositePolicy {
    /// Registry tag.
    pub const TYPE_TAG: &'static str = "composite";

    /// A chain over `policies`, run in the given order.
    pub fn new(policies: Vec<Box<dyn NamingPolicy>>) -> Self {
        Self { policies }
    }

    /// Append a child, builder style.
    pub fn then(mut self, policy: impl NamingPolicy + 'static) -> Self {
        self.push(policy);
        self
    }

    /// Append a child.
    pub fn push(&mut self, policy: impl NamingPolicy + 'static) {
        self.policies.push(Box::new(policy));
    }

    /// Resolve every entry of `policies` through `registry`, in order.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if `policies` is not an array of objects, otherwise
    /// the first resolution error of a child.
    pub fn from_config(config: &PolicyConfig, registry: &PolicyRegistry) -> Result<Self> {
        let policies = config
            .configs(POLICIES_FIELD)?
            .iter()
            .map(|child| registry.resolve(child))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { policies })
    }

    /// The children, in run order.
    pub fn policies(&self) -> &[Box<dyn NamingPolicy>] {
        &self.policies
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.policies.len()
    }

    /// True if the chain has no children.
    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}

impl NamingPolicy for CompositePolicy {
    fn type_tag(&self) -> &'static str {
        Self::TYPE_TAG
    }

    fn generate(&self, ctx: &NameContext) -> Result<String> {
        let last = self
            .policies
            .iter()
            .enumerate()
            .try_fold(ctx.clone(), |current, (step, policy)| {
                let base = policy.generate(&current)?;
                tracing::trace!(step, policy = policy.type_tag(), base = %base, "composite step");
                Ok::<_, NamingError>(current.with_base(base))
            })?;
        Ok(last.base().to_string())
    }

    fn to_config(&self) -> PolicyConfig {
        let children: Vec<serde_json::Value> = self
            .policies
            .iter()
            .map(|policy| policy.to_config().into_value())
            .collect();
        PolicyConfig::new(Self::TYPE_TAG).with(POLICIES_FIELD, children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::{IdentityPolicy, IncrementPolicy, PrefixPolicy, SuffixPolicy};

    #[test]
    fn empty_chain_returns_base() {
        let policy = CompositePolicy::default();
        assert!(policy.is_empty());
        assert_eq!(policy.generate(&NameContext::new("x", ".y")).unwrap(), "x");
    }

    #[test]
    fn identity_chain_is_noop() {
        let policy = CompositePolicy::default()
            .then(IdentityPolicy)
            .then(IdentityPolicy);
        assert_eq!(policy.generate(&NameContext::new("x", ".y")).unwrap(), "x");
    }

    #[test]
    fn children_run_in_order() {
        let policy = CompositePolicy::default()
            .then(PrefixPolicy::new("a_"))
            .then(SuffixPolicy::new("_z"))
            .then(PrefixPolicy::new("b_"));
        assert_eq!(
            policy.generate(&NameContext::new("m", "")).unwrap(),
            "b_a_m_z"
        );
    }

    #[test]
    fn nested_composites() {
        let inner = CompositePolicy::default()
            .then(PrefixPolicy::new("in_"))
            .then(SuffixPolicy::new("_in"));
        let outer = CompositePolicy::default()
            .then(PrefixPolicy::new("out_"))
            .then(inner);
        assert_eq!(outer.len(), 2);
        assert_eq!(
            outer.generate(&NameContext::new("x", "")).unwrap(),
            "in_out_x_in"
        );
    }

    #[test]
    fn child_error_aborts_chain() {
        let policy = CompositePolicy::default()
            .then(PrefixPolicy::new("p_"))
            .then(IncrementPolicy::default())
            .then(SuffixPolicy::new("_never"));
        assert!(matches!(
            policy.generate(&NameContext::new("x", ".y")),
            Err(NamingError::MissingDirectory { .. })
        ));
    }

    #[test]
    fn to_config_lists_children() {
        let policy = CompositePolicy::default()
            .then(PrefixPolicy::new("a_"))
            .then(IdentityPolicy);
        let expected = PolicyConfig::from(vec![
            PolicyConfig::new("prefix").with("prefix", "a_"),
            PolicyConfig::new("identity"),
        ]);
        assert_eq!(policy.to_config(), expected);
    }

    #[test]
    fn from_config_rejects_non_array() {
        let registry = PolicyRegistry::with_builtins();
        let cfg = PolicyConfig::new("composite").with("policies", "identity");
        assert!(CompositePolicy::from_config(&cfg, &registry)
            .unwrap_err()
            .is_invalid_config());
    }

    #[test]
    fn from_config_missing_policies_is_empty() {
        let registry = PolicyRegistry::with_builtins();
        let policy = CompositePolicy::from_config(&PolicyConfig::new("composite"), &registry).unwrap();
        assert!(policy.is_empty());
        assert_eq!(policy.to_config(), PolicyConfig::from(Vec::<PolicyConfig>::new()));
    }
}
