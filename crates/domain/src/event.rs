//! Region events — edge-triggered notifications.
//!
//! An event is produced only when the monitored instant crosses a region
//! boundary, never on every classification call.

use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::range::TimeRange;

/// Direction of a boundary crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionEventKind {
    /// The instant moved from outside to inside the range.
    Entered,
    /// The instant moved from inside to outside the range.
    Left,
}

impl fmt::Display for RegionEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entered => f.write_str("entered"),
            Self::Left => f.write_str("left"),
        }
    }
}

/// Payload handed to a region's event handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionEvent {
    pub kind: RegionEventKind,
    /// The instant that caused the crossing.
    pub at: NaiveTime,
    /// Range of the region that fired.
    pub range: TimeRange,
    /// Text of the region that fired.
    pub text: String,
}
