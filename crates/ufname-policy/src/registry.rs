//! # Policy Registry
//!
//! Maps policy type tags to constructors so policy trees can be rebuilt
//! from configuration data.
//!
//! A registry is an ordinary value. Build one at startup with
//! [`PolicyRegistry::with_builtins`], register any custom policies, then
//! share it by reference (or `Arc`) with everything that resolves configs.
//! Registration needs `&mut self`; resolution needs only `&self`, so a
//! fully built registry can serve concurrent `resolve` calls from many
//! threads.
//!
//! The registry dispatches on the `type` field and nothing else.
//! Policy-specific fields are validated by each constructor.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;
use ufname_core::{NamingError, PolicyConfig, Result};

use crate::builtins::{
    HostnamePolicy, IdentityPolicy, IncrementPolicy, MetadataHashPolicy, PrefixPolicy,
    RandomHexPolicy, SuffixPolicy, TimestampPolicy, UuidPolicy,
};
use crate::composite::CompositePolicy;
use crate::policy::NamingPolicy;

/// Builds a policy from its config. Receives the registry so that
/// container policies can resolve their children.
pub type PolicyConstructor =
    Box<dyn Fn(&PolicyConfig, &PolicyRegistry) -> Result<Box<dyn NamingPolicy>> + Send + Sync>;

fn constructor<F>(f: F) -> PolicyConstructor
where
    F: Fn(&PolicyConfig, &PolicyRegistry) -> Result<Box<dyn NamingPolicy>> + Send + Sync + 'static,
{
    Box::new(f)
}

/// Tag-keyed table of policy constructors.
#[derive(Default)]
pub struct PolicyRegistry {
    constructors: BTreeMap<String, PolicyConstructor>,
}

impl PolicyRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the nine built-in leaf policies and `composite`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.insert_leaf(IdentityPolicy::TYPE_TAG, IdentityPolicy::from_config);
        registry.insert_leaf(PrefixPolicy::TYPE_TAG, PrefixPolicy::from_config);
        registry.insert_leaf(SuffixPolicy::TYPE_TAG, SuffixPolicy::from_config);
        registry.insert_leaf(RandomHexPolicy::TYPE_TAG, RandomHexPolicy::from_config);
        registry.insert_leaf(TimestampPolicy::TYPE_TAG, TimestampPolicy::from_config);
        registry.insert_leaf(IncrementPolicy::TYPE_TAG, IncrementPolicy::from_config);
        registry.insert_leaf(UuidPolicy::TYPE_TAG, UuidPolicy::from_config);
        registry.insert_leaf(HostnamePolicy::TYPE_TAG, HostnamePolicy::from_config);
        registry.insert_leaf(MetadataHashPolicy::TYPE_TAG, MetadataHashPolicy::from_config);
        registry.constructors.insert(
            CompositePolicy::TYPE_TAG.to_string(),
            constructor(|config, registry| {
                Ok(Box::new(CompositePolicy::from_config(config, registry)?))
            }),
        );
        registry
    }

    /// Alias for [`PolicyRegistry::with_builtins`].
    pub fn new_default() -> Self {
        Self::with_builtins()
    }

    fn insert_leaf<P>(&mut self, tag: &str, build: fn(&PolicyConfig) -> Result<P>)
    where
        P: NamingPolicy + 'static,
    {
        self.constructors.insert(
            tag.to_string(),
            constructor(move |config, _| Ok(Box::new(build(config)?))),
        );
    }

    /// Register a constructor under `tag`.
    ///
    /// # Errors
    ///
    /// - `DuplicateRegistration` if `tag` is already registered.
    /// - `InvalidConfig` if `tag` is empty (an empty `type` never resolves).
    pub fn register<F>(&mut self, tag: impl Into<String>, constructor: F) -> Result<()>
    where
        F: Fn(&PolicyConfig, &PolicyRegistry) -> Result<Box<dyn NamingPolicy>>
            + Send
            + Sync
            + 'static,
    {
        let tag = tag.into();
        if tag.is_empty() {
            return Err(NamingError::invalid_config(tag, "type tag must be non-empty"));
        }
        if self.constructors.contains_key(&tag) {
            return Err(NamingError::DuplicateRegistration(tag));
        }
        tracing::debug!(tag = %tag, "registered naming policy");
        self.constructors.insert(tag, Box::new(constructor));
        Ok(())
    }

    /// True if a constructor is registered under `tag`.
    pub fn contains(&self, tag: &str) -> bool {
        self.constructors.contains_key(tag)
    }

    /// Registered tags, in sorted order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(String::as_str)
    }

    /// Number of registered tags.
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    /// True if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }

    /// Build a policy from its config.
    ///
    /// # Errors
    ///
    /// - `MissingType` if the config has no non-empty string `type`.
    /// - `UnknownType` if the tag is not registered.
    /// - Whatever the constructor returns for bad policy-specific fields.
    pub fn resolve(&self, config: &PolicyConfig) -> Result<Box<dyn NamingPolicy>> {
        let tag = config.type_tag().ok_or(NamingError::MissingType)?;
        let constructor = self
            .constructors
            .get(tag)
            .ok_or_else(|| NamingError::UnknownType(tag.to_string()))?;
        tracing::debug!(tag, "resolving naming policy");
        constructor(config, self)
    }

    /// Build a policy from a JSON value. Non-objects are `InvalidConfig`.
    pub fn resolve_value(&self, value: Value) -> Result<Box<dyn NamingPolicy>> {
        self.resolve(&PolicyConfig::try_from(value)?)
    }

    /// Build a policy from JSON text.
    pub fn resolve_json(&self, text: &str) -> Result<Box<dyn NamingPolicy>> {
        self.resolve(&PolicyConfig::from_json_str(text)?)
    }

    /// Build a policy from YAML text.
    pub fn resolve_yaml(&self, text: &str) -> Result<Box<dyn NamingPolicy>> {
        self.resolve(&PolicyConfig::from_yaml_str(text)?)
    }
}

impl fmt::Debug for PolicyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolicyRegistry")
            .field("tags", &self.constructors.keys().collect::<Vec<_>>())
            .finish()
    }
}
