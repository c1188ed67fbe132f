//! # The Naming Policy Contract
//!
//! Every naming strategy implements [`NamingPolicy`]: it turns a
//! [`NameContext`] into a new base name and describes itself as a
//! [`PolicyConfig`]. The reverse direction, config to policy, is a
//! constructor registered with the
//! [`PolicyRegistry`](crate::registry::PolicyRegistry) under the policy's
//! type tag.
//!
//! ## Contract
//!
//! - `generate` returns a base name **without** extension. The builder
//!   appends the extension once, after the whole chain has run.
//! - `generate` never mutates the filesystem. At most it reads (existence
//!   checks).
//! - `to_config` is faithful: resolving the returned config through a
//!   registry yields a policy whose `to_config` is equal to it.

use std::fmt;

use ufname_core::{NameContext, PolicyConfig, Result};

/// A pluggable, serializable filename-construction strategy.
pub trait NamingPolicy: Send + Sync + fmt::Debug {
    /// The tag this policy is registered under and serialized with.
    fn type_tag(&self) -> &'static str;

    /// Produce the next base name from `ctx`.
    fn generate(&self, ctx: &NameContext) -> Result<String>;

    /// Serialize this policy's configuration.
    fn to_config(&self) -> PolicyConfig;
}

impl<P: NamingPolicy + ?Sized> NamingPolicy for Box<P> {
    fn type_tag(&self) -> &'static str {
        (**self).type_tag()
    }

    fn generate(&self, ctx: &NameContext) -> Result<String> {
        (**self).generate(ctx)
    }

    fn to_config(&self) -> PolicyConfig {
        (**self).to_config()
    }
}
