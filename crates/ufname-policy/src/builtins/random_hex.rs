//! Random hexadecimal token policy.

use std::sync::Arc;

use ufname_core::{to_hex, NameContext, NamingError, OsRandom, PolicyConfig, Result, SecureRandom};

use crate::policy::NamingPolicy;

/// Appends `_<token>`, where the token is `length` lowercase hex
/// characters drawn from a cryptographically secure source.
#[derive(Debug, Clone)]
pub struct RandomHexPolicy {
    length: usize,
    rng: Arc<dyn SecureRandom>,
}

impl RandomHexPolicy {
    /// Registry tag.
    pub const TYPE_TAG: &'static str = "random_hex";
    /// Token length used when `length` is not configured.
    pub const DEFAULT_LENGTH: usize = 8;
    /// Longest token accepted: one filename component.
    pub const MAX_LENGTH: usize = 255;

    /// # Errors
    ///
    /// `InvalidConfig` if `length` is zero or above [`Self::MAX_LENGTH`].
    pub fn new(length: usize) -> Result<Self> {
        if length == 0 || length > Self::MAX_LENGTH {
            return Err(NamingError::invalid_config(
                Self::TYPE_TAG,
                format!("length must be in 1..={}, got {length}", Self::MAX_LENGTH),
            ));
        }
        Ok(Self {
            length,
            rng: Arc::new(OsRandom),
        })
    }

    /// Reads `length` (default 8). Zero, negative, or oversized is
    /// `InvalidConfig`.
    pub fn from_config(config: &PolicyConfig) -> Result<Self> {
        let length = config.i64_or("length", Self::DEFAULT_LENGTH as i64)?;
        let length = usize::try_from(length).map_err(|_| {
            NamingError::invalid_config(
                Self::TYPE_TAG,
                format!("length must be positive, got {length}"),
            )
        })?;
        Self::new(length)
    }

    /// Substitute the random source.
    pub fn with_rng(mut self, rng: Arc<dyn SecureRandom>) -> Self {
        self.rng = rng;
        self
    }

    /// Token length in hex characters.
    pub fn length(&self) -> usize {
        self.length
    }

    fn token(&self) -> String {
        let bytes = self.rng.random_bytes(self.length.div_ceil(2));
        let mut token = to_hex(&bytes);
        token.truncate(self.length);
        token
    }
}

impl Default for RandomHexPolicy {
    fn default() -> Self {
        Self {
            length: Self::DEFAULT_LENGTH,
            rng: Arc::new(OsRandom),
        }
    }
}

impl NamingPolicy for RandomHexPolicy {
    fn type_tag(&self) -> &'static str {
        Self::TYPE_TAG
    }

    fn generate(&self, ctx: &NameContext) -> Result<String> {
        Ok(format!("{}_{}", ctx.base(), self.token()))
    }

    fn to_config(&self) -> PolicyConfig {
        PolicyConfig::new(Self::TYPE_TAG).with("length", self.length)
    }
}
