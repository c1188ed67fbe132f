//! Sequence-number policy.
//!
//! Scans `base_<start>`, `base_<start+1>`, ... in the context's directory
//! and settles on the first candidate whose file does not exist yet.
//! The check and the caller's eventual write are not atomic: two callers
//! racing on the same directory can pick the same candidate.

use std::sync::Arc;

use ufname_core::{ExistenceCheck, FsExistence, NameContext, NamingError, PolicyConfig, Result};

use crate::policy::NamingPolicy;

/// Appends `_<n>`, zero-padded to `width`, for the first `n >= start` not
/// already taken in the target directory.
#[derive(Debug, Clone)]
pub struct IncrementPolicy {
    width: usize,
    start: i64,
    max_attempts: Option<u64>,
    probe: Arc<dyn ExistenceCheck>,
}

impl IncrementPolicy {
    /// Registry tag.
    pub const TYPE_TAG: &'static str = "increment";
    /// Zero-padding width used when `width` is not configured.
    pub const DEFAULT_WIDTH: usize = 3;
    /// First sequence number tried when `start` is not configured.
    pub const DEFAULT_START: i64 = 1;
    /// Widest padding accepted: one filename component.
    pub const MAX_WIDTH: usize = 255;
    /// Scan bound used when `max_attempts` is not configured.
    pub const DEFAULT_MAX_ATTEMPTS: u64 = 1_000_000;
    /// Largest `max_attempts` accepted. Configs store it as a signed integer.
    pub const MAX_ATTEMPTS_LIMIT: u64 = i64::MAX as u64;

    /// # Errors
    ///
    /// `InvalidConfig` if `width` is above [`Self::MAX_WIDTH`].
    pub fn new(width: usize, start: i64) -> Result<Self> {
        if width > Self::MAX_WIDTH {
            return Err(NamingError::invalid_config(
                Self::TYPE_TAG,
                format!("width must be in 0..={}, got {width}", Self::MAX_WIDTH),
            ));
        }
        Ok(Self {
            width,
            start,
            max_attempts: None,
            probe: Arc::new(FsExistence),
        })
    }

    /// Reads `width` (default 3), `start` (default 1), and the optional
    /// `max_attempts`.
    pub fn from_config(config: &PolicyConfig) -> Result<Self> {
        let width = config.i64_or("width", Self::DEFAULT_WIDTH as i64)?;
        let width = usize::try_from(width).map_err(|_| {
            NamingError::invalid_config(
                Self::TYPE_TAG,
                format!("width must not be negative, got {width}"),
            )
        })?;
        let start = config.i64_or("start", Self::DEFAULT_START)?;
        let policy = Self::new(width, start)?;
        match config.optional_i64("max_attempts")? {
            None => Ok(policy),
            Some(limit) => {
                let limit = u64::try_from(limit).map_err(|_| {
                    NamingError::invalid_config(
                        Self::TYPE_TAG,
                        format!("max_attempts must be positive, got {limit}"),
                    )
                })?;
                policy.with_max_attempts(limit)
            }
        }
    }

    /// Bound the scan.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if `limit` is zero or above
    /// [`Self::MAX_ATTEMPTS_LIMIT`].
    pub fn with_max_attempts(mut self, limit: u64) -> Result<Self> {
        if limit == 0 || limit > Self::MAX_ATTEMPTS_LIMIT {
            return Err(NamingError::invalid_config(
                Self::TYPE_TAG,
                format!(
                    "max_attempts must be in 1..={}, got {limit}",
                    Self::MAX_ATTEMPTS_LIMIT
                ),
            ));
        }
        self.max_attempts = Some(limit);
        Ok(self)
    }

    /// Substitute the existence predicate.
    pub fn with_probe(mut self, probe: Arc<dyn ExistenceCheck>) -> Self {
        self.probe = probe;
        self
    }

    /// Zero-padding width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// First sequence number tried.
    pub fn start(&self) -> i64 {
        self.start
    }

    /// The effective scan bound.
    pub fn attempt_limit(&self) -> u64 {
        self.max_attempts.unwrap_or(Self::DEFAULT_MAX_ATTEMPTS)
    }

    fn candidate(&self, base: &str, n: i64) -> String {
        format!("{base}_{n:0width$}", width = self.width)
    }
}

impl Default for IncrementPolicy {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            start: Self::DEFAULT_START,
            max_attempts: None,
            probe: Arc::new(FsExistence),
        }
    }
}

impl NamingPolicy for IncrementPolicy {
    fn type_tag(&self) -> &'static str {
        Self::TYPE_TAG
    }

    fn generate(&self, ctx: &NameContext) -> Result<String> {
        let directory = ctx.directory().ok_or_else(|| NamingError::MissingDirectory {
            policy: Self::TYPE_TAG.to_string(),
        })?;
        let limit = self.attempt_limit();
        let exhausted = |attempts| NamingError::ExhaustedAttempts {
            base: ctx.base().to_string(),
            attempts,
        };

        let mut n = self.start;
        for attempt in 1..=limit {
            let candidate = self.candidate(ctx.base(), n);
            let path = directory.join(format!("{candidate}{}", ctx.ext()));
            if !self.probe.exists(&path) {
                tracing::debug!(candidate = %candidate, attempts = attempt, "increment found free name");
                return Ok(candidate);
            }
            tracing::trace!(path = %path.display(), "increment candidate taken");
            n = n.checked_add(1).ok_or_else(|| exhausted(attempt))?;
        }
        Err(exhausted(limit))
    }

    fn to_config(&self) -> PolicyConfig {
        let config = PolicyConfig::new(Self::TYPE_TAG)
            .with("width", self.width)
            .with("start", self.start);
        match self.max_attempts {
            Some(limit) => config.with("max_attempts", limit),
            None => config,
        }
    }
}
