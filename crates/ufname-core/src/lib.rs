//! # ufname-core: Foundational Types for Filename Policies
//!
//! This crate defines the data every naming policy operates on and the
//! contracts of the external collaborators policies consult. It depends on
//! nothing internal; `ufname-policy` builds the policy tree on top of it.
//!
//! ## Key Design Principles
//!
//! 1. **Immutable context.** [`NameContext`] is never mutated in place. Each
//!    step of a policy chain produces a new value via [`NameContext::with_base`],
//!    sharing the directory and metadata of its predecessor.
//!
//! 2. **Config is data.** [`PolicyConfig`] is a plain JSON object with a
//!    mandatory `type` field. It round-trips through JSON and YAML text
//!    without loss.
//!
//! 3. **`CanonicalBytes` for hashing.** Metadata values are hashed over their
//!    RFC 8785 canonical form so logically equal values always produce the
//!    same digest, regardless of map insertion order.
//!
//! 4. **Collaborators behind traits.** Clock, host identity, secure entropy,
//!    and the filesystem existence predicate are traits with one
//!    system-backed implementation each. Nothing here reimplements them.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `ufname-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod clock;
pub mod config;
pub mod context;
pub mod digest;
pub mod entropy;
pub mod error;
pub mod host;
pub mod identity;
pub mod probe;

// Re-export primary types for ergonomic imports.
pub use canonical::CanonicalBytes;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::PolicyConfig;
pub use context::{Metadata, NameContext};
pub use digest::{to_hex, HashAlgorithm};
pub use entropy::{OsRandom, SecureRandom};
pub use error::{CanonicalizationError, NamingError, Result};
pub use host::{FixedHost, HostIdentity, SystemHost};
pub use identity::UuidVersion;
pub use probe::{ExistenceCheck, FsExistence};
