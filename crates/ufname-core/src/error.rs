//! # Error Types: Structured Error Hierarchy
//!
//! Defines the single error type returned by every fallible operation in
//! ufname. All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - Configuration errors name the policy tag and the offending field.
//! - Registry errors carry the tag that failed to resolve or register.
//! - Generation errors carry the base name being processed.
//!
//! Errors are raised at the point of misuse and never retried internally.

use thiserror::Error;

/// Convenience alias used throughout the workspace.
pub type Result<T, E = NamingError> = std::result::Result<T, E>;

/// Top-level error type for filename policies.
#[derive(Error, Debug)]
pub enum NamingError {
    /// A policy parameter is malformed or out of range.
    #[error("invalid config for policy {policy:?}: {reason}")]
    InvalidConfig {
        /// Type tag of the policy being configured.
        policy: String,
        /// What was wrong with the parameter.
        reason: String,
    },

    /// The config has no usable `type` field.
    #[error("missing 'type' in policy config")]
    MissingType,

    /// The config's `type` tag is not registered.
    #[error("unknown policy type {0:?}")]
    UnknownType(String),

    /// A constructor is already registered under this tag.
    #[error("policy type {0:?} already registered")]
    DuplicateRegistration(String),

    /// A directory-scanning policy was invoked without a directory.
    #[error("policy {policy:?} requires a directory in the naming context")]
    MissingDirectory {
        /// Type tag of the policy that needed the directory.
        policy: String,
    },

    /// The hash algorithm name is not supported.
    #[error("unknown hash algorithm {0:?}")]
    UnknownAlgorithm(String),

    /// Only UUID versions 1 and 4 are supported.
    #[error("unsupported UUID version {0}; only versions 1 and 4 are supported")]
    UnsupportedVersion(i64),

    /// Every candidate in the scan window was already taken.
    #[error("no free sequence number for base {base:?} after {attempts} attempts")]
    ExhaustedAttempts {
        /// Base name the sequence was appended to.
        base: String,
        /// Number of candidates checked.
        attempts: u64,
    },

    /// Canonicalization of a metadata value failed.
    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] CanonicalizationError),

    /// JSON config text could not be parsed or produced.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML config text could not be parsed or produced.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl NamingError {
    /// Build an [`NamingError::InvalidConfig`] for the given policy tag.
    pub fn invalid_config(policy: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            policy: policy.into(),
            reason: reason.into(),
        }
    }

    /// True for every error caused by bad policy parameters.
    ///
    /// An unsupported UUID version is a configuration error with its own
    /// variant so callers can report the offending value.
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, Self::InvalidConfig { .. } | Self::UnsupportedVersion(_))
    }
}

/// Error during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}
