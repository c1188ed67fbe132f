//! # Built-in Naming Policies
//!
//! The nine leaf strategies registered by
//! [`PolicyRegistry::with_builtins`](crate::registry::PolicyRegistry::with_builtins):
//!
//! | Tag | Policy | Output |
//! |---|---|---|
//! | `identity` | [`IdentityPolicy`] | `base` |
//! | `prefix` | [`PrefixPolicy`] | `prefix + base` |
//! | `suffix` | [`SuffixPolicy`] | `base + suffix` |
//! | `random_hex` | [`RandomHexPolicy`] | `base_<hex token>` |
//! | `timestamp` | [`TimestampPolicy`] | `base_<formatted now>` |
//! | `increment` | [`IncrementPolicy`] | `base_<first free sequence number>` |
//! | `uuid` | [`UuidPolicy`] | `base_<uuid>` |
//! | `hostname` | [`HostnamePolicy`] | `base_<host>` |
//! | `metadata_hash` | [`MetadataHashPolicy`] | `base_<digest prefix>` or `base` |
//!
//! Each policy exposes `TYPE_TAG`, a `from_config` constructor, and the
//! [`NamingPolicy`](crate::policy::NamingPolicy) implementation. Policies
//! that consult an external collaborator hold it behind an `Arc<dyn _>`
//! with a `with_*` method to substitute it.

mod affix;
mod hostname;
mod identity;
mod increment;
mod metadata_hash;
mod random_hex;
mod timestamp;
mod uuid;

pub use affix::{PrefixPolicy, SuffixPolicy};
pub use hostname::HostnamePolicy;
pub use identity::IdentityPolicy;
pub use increment::IncrementPolicy;
pub use metadata_hash::MetadataHashPolicy;
pub use random_hex::RandomHexPolicy;
pub use timestamp::TimestampPolicy;
pub use uuid::UuidPolicy;
