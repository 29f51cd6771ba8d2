//! Time-of-day range — an open interval on the 24-hour line.

use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A `(start, stop)` pair of wall-clock times.
///
/// Membership is a strict open-interval test using plain ordering of
/// [`NaiveTime`]. There is no midnight wrap-around: a range whose `stop`
/// is earlier than its `start` (e.g. `22:00..06:00`) contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: NaiveTime,
    pub stop: NaiveTime,
}

impl TimeRange {
    #[must_use]
    pub fn new(start: NaiveTime, stop: NaiveTime) -> Self {
        Self { start, stop }
    }

    /// `true` iff `value` is strictly after `start` and strictly before `stop`.
    #[must_use]
    pub fn contains(&self, value: NaiveTime) -> bool {
        value > self.start && value < self.stop
    }

    /// Whether `stop` lies before `start`, i.e. the range was probably
    /// meant to span midnight. Diagnostic only: [`contains`](Self::contains)
    /// treats such a range as empty.
    #[must_use]
    pub fn is_wrapping(&self) -> bool {
        self.stop < self.start
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            self.start.format("%H:%M:%S"),
            self.stop.format("%H:%M:%S")
        )
    }
}
