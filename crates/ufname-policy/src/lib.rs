//! # ufname-policy: Composable Filename Policies
//!
//! A naming policy turns a [`NameContext`] into a new base name. Policies
//! are small, independently testable, and chain through a
//! [`CompositePolicy`]. Every policy serializes to a [`PolicyConfig`] and
//! back through a [`PolicyRegistry`], so a whole naming scheme can live in
//! a JSON or YAML file.
//!
//! ## Flow
//!
//! 1. Construct a policy tree directly, or resolve one from config with
//!    [`PolicyRegistry::resolve`].
//! 2. Call [`build_filename`] with the base name, extension, and optional
//!    directory and metadata.
//! 3. The builder runs the policy (recursively through composites) and
//!    appends the extension.
//!
//! ```
//! use ufname_policy::{build_filename, PolicyRegistry};
//!
//! let registry = PolicyRegistry::with_builtins();
//! let policy = registry.resolve_json(
//!     r#"{"type":"composite","policies":[
//!         {"type":"prefix","prefix":"draft_"},
//!         {"type":"suffix","suffix":"_final"}
//!     ]}"#,
//! )?;
//! assert_eq!(build_filename(&policy, "report", ".pdf", None, None)?, "draft_report_final.pdf");
//! # Ok::<(), ufname_policy::NamingError>(())
//! ```
//!
//! ## Crate Policy
//!
//! - Depends only on `ufname-core` internally.
//! - `generate` never writes to the filesystem.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod builder;
pub mod builtins;
pub mod composite;
pub mod policy;
pub mod registry;

pub use builder::{build_filename, FilenameRequest};
pub use builtins::{
    HostnamePolicy, IdentityPolicy, IncrementPolicy, MetadataHashPolicy, PrefixPolicy,
    RandomHexPolicy, SuffixPolicy, TimestampPolicy, UuidPolicy,
};
pub use composite::CompositePolicy;
pub use policy::NamingPolicy;
pub use registry::{PolicyConstructor, PolicyRegistry};

// Foundational types callers need alongside the policies.
pub use ufname_core::{
    Clock, ExistenceCheck, FixedClock, FixedHost, HashAlgorithm, HostIdentity, Metadata,
    NameContext, NamingError, PolicyConfig, Result, SecureRandom, UuidVersion,
};
