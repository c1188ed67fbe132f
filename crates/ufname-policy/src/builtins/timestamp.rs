//! Wall-clock timestamp policy.

use std::sync::Arc;

use ufname_core::clock::format_timestamp;
use ufname_core::{Clock, NameContext, PolicyConfig, Result, SystemClock};

use crate::policy::NamingPolicy;

/// Appends `_<now formatted with fmt>`.
///
/// The time is read at generation, not construction. A malformed format is
/// not an error; see [`format_timestamp`].
#[derive(Debug, Clone)]
pub struct TimestampPolicy {
    fmt: String,
    clock: Arc<dyn Clock>,
}

impl TimestampPolicy {
    /// Registry tag.
    pub const TYPE_TAG: &'static str = "timestamp";
    /// Pattern used when `fmt` is not configured.
    pub const DEFAULT_FORMAT: &'static str = "%Y%m%d_%H%M%S";

    /// Render the system clock with the strftime pattern `fmt`.
    pub fn new(fmt: impl Into<String>) -> Self {
        Self {
            fmt: fmt.into(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Reads `fmt` (default `%Y%m%d_%H%M%S`).
    pub fn from_config(config: &PolicyConfig) -> Result<Self> {
        Ok(Self::new(config.str_or("fmt", Self::DEFAULT_FORMAT)?))
    }

    /// Substitute the clock.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// The strftime pattern.
    pub fn fmt(&self) -> &str {
        &self.fmt
    }
}

impl Default for TimestampPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FORMAT)
    }
}

impl NamingPolicy for TimestampPolicy {
    fn type_tag(&self) -> &'static str {
        Self::TYPE_TAG
    }

    fn generate(&self, ctx: &NameContext) -> Result<String> {
        let now = self.clock.now();
        Ok(format!("{}_{}", ctx.base(), format_timestamp(&now, &self.fmt)))
    }

    fn to_config(&self) -> PolicyConfig {
        PolicyConfig::new(Self::TYPE_TAG).with("fmt", self.fmt.as_str())
    }
}
