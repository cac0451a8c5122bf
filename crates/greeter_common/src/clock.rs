//! Clock abstraction so the timestamp line can be pinned in tests.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};

/// `YYYY-MM-DD HH:MM:SS`, 24-hour, zero padded
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Source of the current local time
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Reads the host clock in the host's local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

pub fn format_timestamp(ts: &DateTime<Local>) -> String {
    format_timestamp_with(ts, DEFAULT_TIME_FORMAT)
}

/// Caller must have checked `fmt` with [`is_valid_time_format`]; chrono
/// panics while rendering an invalid format string.
pub fn format_timestamp_with(ts: &DateTime<Local>, fmt: &str) -> String {
    ts.format(fmt).to_string()
}

pub fn is_valid_time_format(fmt: &str) -> bool {
    !StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error))
}
