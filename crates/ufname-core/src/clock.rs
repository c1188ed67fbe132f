//! # Clock: Wall-Clock Time Source
//!
//! Defines the [`Clock`] contract consulted by timestamp-based policies and
//! the strftime rendering they share.
//!
//! - [`SystemClock`]: the local wall clock, with the local UTC offset.
//! - [`FixedClock`]: always returns the same instant. Used in tests and for
//!   reproducible batch runs.
//!
//! ## Formatting
//!
//! Patterns use chrono's strftime dialect (`%Y%m%d_%H%M%S`, `%j`, `%s`, ...).
//! A malformed pattern is not an error: unrecognized specifiers are dropped
//! from the output and reported through `tracing` at `warn` level.

use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, Local};

/// Source of the current wall-clock time.
pub trait Clock: Send + Sync + std::fmt::Debug {
    /// The current instant, with the offset it should be rendered in.
    fn now(&self) -> DateTime<FixedOffset>;
}

/// The process's local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<FixedOffset>);

impl FixedClock {
    /// Freeze the clock at `instant`.
    pub fn new(instant: DateTime<FixedOffset>) -> Self {
        Self(instant)
    }

    /// Freeze the clock at an RFC 3339 timestamp.
    pub fn parse_rfc3339(s: &str) -> Result<Self, chrono::ParseError> {
        DateTime::parse_from_rfc3339(s).map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// Render `instant` with a strftime pattern, dropping invalid specifiers.
pub fn format_timestamp(instant: &DateTime<FixedOffset>, fmt: &str) -> String {
    let items: Vec<Item<'_>> = StrftimeItems::new(fmt).collect();
    let valid: Vec<Item<'_>> = items
        .iter()
        .filter(|item| !matches!(item, Item::Error))
        .cloned()
        .collect();
    if valid.len() != items.len() {
        tracing::warn!(
            fmt,
            dropped = items.len() - valid.len(),
            "timestamp format contains invalid specifiers"
        );
    }

    let mut out = String::new();
    if write!(out, "{}", instant.format_with_items(valid.iter())).is_err() {
        tracing::warn!(fmt, "timestamp format could not be rendered");
    }
    out
}
