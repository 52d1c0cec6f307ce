//! Time source for channel dates
//!
//! `pubDate` and `lastBuildDate` fall back to "now" when the feed has no
//! `updated` timestamp. The clock is injected so that rendering can be made
//! deterministic.

use chrono::{DateTime, Utc};
use std::fmt;

/// Source of the current time
pub trait Clock: fmt::Debug + Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
