//! Time sources.
//!
//! Default output names and provenance comments embed the current time, so
//! the time source is passed in rather than read directly.

use chrono::{DateTime, Local, Utc};

/// Source of the current time.
pub trait Clock {
    /// Current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Clock frozen at `secs` seconds after the Unix epoch.
    ///
    /// Out-of-range values fall back to the epoch itself.
    pub fn from_unix_seconds(secs: i64) -> Self {
        Self(DateTime::from_timestamp(secs, 0).unwrap_or_default())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Render an instant the way C `ctime` does, in local time, without the newline.
pub fn format_ctime(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local)
        .format("%a %b %e %H:%M:%S %Y")
        .to_string()
}
