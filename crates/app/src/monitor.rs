//! Region monitor — feeds one instant to many regions.
//!
//! The monitor is the "external driver" of the edge detectors: on every
//! tick it reads its [`Clock`] and hands the same date-time to each region
//! through the day-gated entry point. Regions stay independent; the
//! monitor never resolves overlaps between them.

use chrono::{NaiveDateTime, NaiveTime};
use regionwatch_domain::event::RegionEventKind;
use regionwatch_domain::id::RegionId;
use regionwatch_domain::region::{TemporalRegion, compare_by_start};

use crate::ports::Clock;

/// A boundary crossing reported by [`RegionMonitor::check_at`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub id: RegionId,
    pub kind: RegionEventKind,
    pub text: String,
}

#[derive(Debug)]
struct Entry {
    id: RegionId,
    region: TemporalRegion,
}

/// Owns a set of regions, ordered by start time, and drives them from a clock.
#[derive(Debug)]
pub struct RegionMonitor<C> {
    clock: C,
    entries: Vec<Entry>,
    enabled: bool,
}

impl<C: Clock> RegionMonitor<C> {
    /// Create an enabled monitor with no regions.
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            entries: Vec::new(),
            enabled: true,
        }
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Master switch. While disabled, ticks are ignored and no region sees
    /// any instant, so their last observed instants stay frozen.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Register a region and return its handle.
    ///
    /// The region is placed after every region with the same or an earlier
    /// start, so insertion order is kept among ties.
    #[tracing::instrument(skip(self, region), fields(region = %region))]
    pub fn add(&mut self, region: TemporalRegion) -> RegionId {
        let id = RegionId::new();
        let at = self
            .entries
            .partition_point(|entry| entry.region.start() <= region.start());
        self.entries.insert(at, Entry { id, region });
        tracing::debug!(%id, position = at, "region added");
        id
    }

    /// Unregister a region, handing it back to the caller.
    #[tracing::instrument(skip(self))]
    pub fn remove(&mut self, id: RegionId) -> Option<TemporalRegion> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        let entry = self.entries.remove(index);
        tracing::debug!("region removed");
        Some(entry.region)
    }

    #[must_use]
    pub fn get(&self, id: RegionId) -> Option<&TemporalRegion> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.region)
    }

    /// Mutate a region in place (change its range, colors, handlers, …).
    ///
    /// Start-time ordering is restored afterwards. Returns `false` when no
    /// region has this id.
    pub fn update(&mut self, id: RegionId, f: impl FnOnce(&mut TemporalRegion)) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|entry| entry.id == id) else {
            return false;
        };
        f(&mut entry.region);
        self.entries.sort_by(|a, b| compare_by_start(&a.region, &b.region));
        true
    }

    /// Regions in start-time order.
    pub fn iter(&self) -> impl Iterator<Item = (RegionId, &TemporalRegion)> {
        self.entries.iter().map(|entry| (entry.id, &entry.region))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Active regions whose range contains `time`. Pure query: no detector
    /// state changes and no handler runs.
    #[must_use]
    pub fn regions_containing(&self, time: NaiveTime) -> Vec<RegionId> {
        self.entries
            .iter()
            .filter(|entry| entry.region.is_active() && entry.region.contains(time))
            .map(|entry| entry.id)
            .collect()
    }

    /// Read the clock and feed the instant to every region.
    pub fn tick(&mut self) -> Vec<Transition> {
        let now = self.clock.now();
        self.check_at(now)
    }

    /// Feed `instant` to every region, in start-time order, and collect the
    /// transitions they fired. Handlers run synchronously during this call.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn check_at(&mut self, instant: NaiveDateTime) -> Vec<Transition> {
        if !self.enabled {
            tracing::trace!("monitor disabled, skipping");
            return Vec::new();
        }

        let mut transitions = Vec::new();
        for entry in &mut self.entries {
            if let Some(kind) = entry.region.check_for_time_and_date(instant) {
                tracing::debug!(
                    region = %entry.id,
                    text = entry.region.text(),
                    %kind,
                    at = %instant,
                    "region transition"
                );
                transitions.push(Transition {
                    id: entry.id,
                    kind,
                    text: entry.region.text().to_string(),
                });
            }
        }
        transitions
    }
}
