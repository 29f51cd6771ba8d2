//! Day filter — the weekdays on which a region is evaluated.

use std::fmt;

use chrono::Weekday;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const ALL_DAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// A set of weekdays, stored as a 7-bit mask (bit 0 = Monday).
///
/// Defaults to all seven days. An empty filter means the region never
/// matches through the day-gated entry points.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayFilter(u8);

impl Default for DayFilter {
    fn default() -> Self {
        Self::all()
    }
}

impl DayFilter {
    const MASK: u8 = 0b0111_1111;

    /// Every day of the week.
    #[must_use]
    pub const fn all() -> Self {
        Self(Self::MASK)
    }

    /// No day at all.
    #[must_use]
    pub const fn none() -> Self {
        Self(0)
    }

    fn bit(day: Weekday) -> u8 {
        1 << day.num_days_from_monday()
    }

    #[must_use]
    pub fn contains(&self, day: Weekday) -> bool {
        self.0 & Self::bit(day) != 0
    }

    pub fn add(&mut self, day: Weekday) {
        self.0 |= Self::bit(day);
    }

    pub fn remove(&mut self, day: Weekday) {
        self.0 &= !Self::bit(day);
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// Replace the whole set with `days`.
    pub fn set(&mut self, days: impl IntoIterator<Item = Weekday>) {
        self.clear();
        for day in days {
            self.add(day);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate the contained days, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        ALL_DAYS.into_iter().filter(move |day| self.contains(*day))
    }

    /// Snapshot of the contained days, Monday first. Mutating the returned
    /// vector does not affect the filter.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Weekday> {
        self.iter().collect()
    }
}

impl FromIterator<Weekday> for DayFilter {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut filter = Self::none();
        filter.set(iter);
        filter
    }
}

impl fmt::Debug for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Serialize for DayFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for DayFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let days = Vec::<Weekday>::deserialize(deserializer)?;
        Ok(days.into_iter().collect())
    }
}
