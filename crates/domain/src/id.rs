//! Typed identifier for regions registered with a monitor.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Handle a monitor hands out for a [`TemporalRegion`](crate::region::TemporalRegion).
///
/// Regions themselves carry no identity (their equality is defined by
/// time range and text); the id only exists at the collection level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionId(uuid::Uuid);

impl Default for RegionId {
    fn default() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl RegionId {
    /// Generate a new random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }

    /// Access the inner UUID.
    #[must_use]
    pub fn as_uuid(self) -> uuid::Uuid {
        self.0
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for RegionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        uuid::Uuid::parse_str(s).map(Self)
    }
}
