//! Temporal region — a recurring time-of-day interval with an edge detector.
//!
//! A [`TemporalRegion`] is fed instants by an external driver (a clock
//! widget, a monitor loop, a test). It classifies each instant against its
//! [`TimeRange`] and fires [`RegionEventKind::Entered`] or
//! [`RegionEventKind::Left`] exactly when the classification flips.
//!
//! The previous classification is not stored as a flag: the region keeps
//! the last instant it observed and re-evaluates it on every call.

use std::cmp::Ordering;
use std::fmt;

use chrono::{Datelike, NaiveDateTime, NaiveTime, Weekday};

use crate::appearance::{Appearance, IconRef};
use crate::color::Color;
use crate::day_filter::DayFilter;
use crate::dispatch::Dispatcher;
use crate::event::{RegionEvent, RegionEventKind};
use crate::range::TimeRange;
use crate::time::now_local_time;

/// A recurring time-of-day interval gated by weekdays.
///
/// Equality (`==`) only looks at `start`, `stop` and `text`; colors, icon,
/// day filter, `active` and detector state are ignored. Ordering is
/// provided separately by [`compare_by_start`].
pub struct TemporalRegion {
    range: TimeRange,
    active: bool,
    days: DayFilter,
    appearance: Appearance,
    last_observed: NaiveTime,
    dispatcher: Dispatcher,
}

impl TemporalRegion {
    /// Create an inactive region over `start..stop` with default appearance
    /// and all seven days.
    #[must_use]
    pub fn new(start: NaiveTime, stop: NaiveTime) -> Self {
        Self {
            range: TimeRange::new(start, stop),
            active: false,
            days: DayFilter::all(),
            appearance: Appearance::default(),
            last_observed: NaiveTime::MIN,
            dispatcher: Dispatcher::new(),
        }
    }

    /// Create a builder for constructing a [`TemporalRegion`].
    #[must_use]
    pub fn builder() -> TemporalRegionBuilder {
        TemporalRegionBuilder::default()
    }

    // ── range ──────────────────────────────────────────────────────────

    #[must_use]
    pub fn range(&self) -> TimeRange {
        self.range
    }

    #[must_use]
    pub fn start(&self) -> NaiveTime {
        self.range.start
    }

    pub fn set_start(&mut self, start: NaiveTime) {
        self.range.start = start;
    }

    #[must_use]
    pub fn stop(&self) -> NaiveTime {
        self.range.stop
    }

    pub fn set_stop(&mut self, stop: NaiveTime) {
        self.range.stop = stop;
    }

    /// See [`TimeRange::contains`]. Not gated by `active` or the day filter.
    #[must_use]
    pub fn contains(&self, value: NaiveTime) -> bool {
        self.range.contains(value)
    }

    // ── activation & days ──────────────────────────────────────────────

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    #[must_use]
    pub fn days(&self) -> &DayFilter {
        &self.days
    }

    pub fn days_mut(&mut self) -> &mut DayFilter {
        &mut self.days
    }

    pub fn add_day(&mut self, day: Weekday) {
        self.days.add(day);
    }

    pub fn remove_day(&mut self, day: Weekday) {
        self.days.remove(day);
    }

    pub fn clear_days(&mut self) {
        self.days.clear();
    }

    pub fn set_days(&mut self, days: impl IntoIterator<Item = Weekday>) {
        self.days.set(days);
    }

    /// Snapshot of the day filter, Monday first.
    #[must_use]
    pub fn days_as_list(&self) -> Vec<Weekday> {
        self.days.to_vec()
    }

    // ── appearance ─────────────────────────────────────────────────────

    #[must_use]
    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    pub fn appearance_mut(&mut self) -> &mut Appearance {
        &mut self.appearance
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.appearance.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.appearance.text = text.into();
    }

    #[must_use]
    pub fn icon(&self) -> Option<&IconRef> {
        self.appearance.icon.as_ref()
    }

    pub fn set_icon(&mut self, icon: Option<IconRef>) {
        self.appearance.icon = icon;
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.appearance.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.appearance.color = color;
    }

    #[must_use]
    pub fn highlight_color(&self) -> Color {
        self.appearance.highlight_color
    }

    pub fn set_highlight_color(&mut self, color: Color) {
        self.appearance.highlight_color = color;
    }

    #[must_use]
    pub fn text_color(&self) -> Color {
        self.appearance.text_color
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.appearance.text_color = color;
    }

    // ── handlers ───────────────────────────────────────────────────────

    /// Register the handler for [`RegionEventKind::Entered`], replacing any
    /// previous one.
    pub fn set_on_entered(&mut self, handler: impl FnMut(&RegionEvent) + Send + 'static) {
        self.dispatcher.set_on_entered(handler);
    }

    /// Register the handler for [`RegionEventKind::Left`], replacing any
    /// previous one.
    pub fn set_on_left(&mut self, handler: impl FnMut(&RegionEvent) + Send + 'static) {
        self.dispatcher.set_on_left(handler);
    }

    pub fn dispatcher_mut(&mut self) -> &mut Dispatcher {
        &mut self.dispatcher
    }

    // ── edge detection ─────────────────────────────────────────────────

    /// The instant the detector last compared against.
    ///
    /// Starts at midnight and only moves on active calls to
    /// [`check_for_time`](Self::check_for_time).
    #[must_use]
    pub fn last_observed(&self) -> NaiveTime {
        self.last_observed
    }

    /// Classify `value` and fire an event if it crossed a boundary since the
    /// last observed instant.
    ///
    /// Inactive regions return immediately without touching their state.
    /// Active calls always record `value` as the new last observed instant.
    /// Returns the kind of event fired, if any (fired even when no handler
    /// is registered).
    pub fn check_for_time(&mut self, value: NaiveTime) -> Option<RegionEventKind> {
        if !self.active {
            return None;
        }

        let was_inside = self.range.contains(self.last_observed);
        let is_inside = self.range.contains(value);

        let kind = match (was_inside, is_inside) {
            (false, true) => Some(RegionEventKind::Entered),
            (true, false) => Some(RegionEventKind::Left),
            _ => None,
        };

        if let Some(kind) = kind {
            let event = RegionEvent {
                kind,
                at: value,
                range: self.range,
                text: self.appearance.text.clone(),
            };
            self.dispatcher.dispatch(&event);
        }

        self.last_observed = value;
        kind
    }

    /// Like [`check_for_time`](Self::check_for_time), but only when `day` is
    /// in the day filter. Skipped calls leave the last observed instant as is.
    pub fn check_for_time_and_day(
        &mut self,
        value: NaiveTime,
        day: Weekday,
    ) -> Option<RegionEventKind> {
        if !self.days.contains(day) {
            return None;
        }
        self.check_for_time(value)
    }

    /// Split `value` into weekday and time of day, then delegate to
    /// [`check_for_time_and_day`](Self::check_for_time_and_day).
    pub fn check_for_time_and_date(&mut self, value: NaiveDateTime) -> Option<RegionEventKind> {
        self.check_for_time_and_day(value.time(), value.weekday())
    }
}

impl PartialEq for TemporalRegion {
    fn eq(&self, other: &Self) -> bool {
        self.range.start == other.range.start
            && self.range.stop == other.range.stop
            && self.appearance.text == other.appearance.text
    }
}

impl Eq for TemporalRegion {}

impl fmt::Debug for TemporalRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemporalRegion")
            .field("range", &self.range)
            .field("active", &self.active)
            .field("days", &self.days)
            .field("appearance", &self.appearance)
            .field("last_observed", &self.last_observed)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for TemporalRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.appearance.text.is_empty() {
            fmt::Display::fmt(&self.range, f)
        } else {
            write!(f, "{} ({})", self.appearance.text, self.range)
        }
    }
}

/// Order two regions by `start` only. Equal starts compare as ties.
#[must_use]
pub fn compare_by_start(a: &TemporalRegion, b: &TemporalRegion) -> Ordering {
    a.range.start.cmp(&b.range.start)
}

/// Stable sort by `start`; regions sharing a start keep their relative order.
pub fn sort_by_start(regions: &mut [TemporalRegion]) {
    regions.sort_by(compare_by_start);
}

/// Step-by-step builder for [`TemporalRegion`].
///
/// Unset `start`/`stop` default to the current local time; everything else
/// defaults like a parsed region (inactive, all days, transparent colors).
#[derive(Debug, Default)]
pub struct TemporalRegionBuilder {
    start: Option<NaiveTime>,
    stop: Option<NaiveTime>,
    active: Option<bool>,
    days: Option<DayFilter>,
    appearance: Appearance,
}

impl TemporalRegionBuilder {
    #[must_use]
    pub fn start(mut self, start: NaiveTime) -> Self {
        self.start = Some(start);
        self
    }

    #[must_use]
    pub fn stop(mut self, stop: NaiveTime) -> Self {
        self.stop = Some(stop);
        self
    }

    #[must_use]
    pub fn active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    #[must_use]
    pub fn days(mut self, days: impl IntoIterator<Item = Weekday>) -> Self {
        self.days = Some(days.into_iter().collect());
        self
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.appearance.text = text.into();
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: IconRef) -> Self {
        self.appearance.icon = Some(icon);
        self
    }

    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.appearance.color = color;
        self
    }

    #[must_use]
    pub fn highlight_color(mut self, color: Color) -> Self {
        self.appearance.highlight_color = color;
        self
    }

    #[must_use]
    pub fn text_color(mut self, color: Color) -> Self {
        self.appearance.text_color = color;
        self
    }

    /// Consume the builder and return a [`TemporalRegion`].
    #[must_use]
    pub fn build(self) -> TemporalRegion {
        let now = now_local_time();
        let start = self.start.unwrap_or(now);
        let stop = self.stop.unwrap_or(now);
        let mut region = TemporalRegion::new(start, stop);
        region.active = self.active.unwrap_or(false);
        region.days = self.days.unwrap_or_default();
        region.appearance = self.appearance;
        region
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::sync::{Arc, Mutex};

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn work_hours() -> TemporalRegion {
        TemporalRegion::builder()
            .start(t(9, 0))
            .stop(t(17, 0))
            .text("work")
            .active(true)
            .build()
    }

    /// Attach handlers that record every fired kind.
    fn recording(region: &mut TemporalRegion) -> Arc<Mutex<Vec<RegionEventKind>>> {
        let log = Arc::new(Mutex::new(Vec::new()));
        let entered = Arc::clone(&log);
        region.set_on_entered(move |e| entered.lock().unwrap().push(e.kind));
        let left = Arc::clone(&log);
        region.set_on_left(move |e| left.lock().unwrap().push(e.kind));
        log
    }

    #[test]
    fn should_start_inactive_with_all_days_and_midnight_observation() {
        let region = TemporalRegion::new(t(9, 0), t(17, 0));
        assert!(!region.is_active());
        assert_eq!(region.days().len(), 7);
        assert_eq!(region.last_observed(), NaiveTime::MIN);
        assert_eq!(region.color(), Color::TRANSPARENT);
        assert!(region.icon().is_none());
    }

    #[test]
    fn should_default_builder_times_to_a_single_instant() {
        let region = TemporalRegion::builder().text("now").build();
        assert_eq!(region.start(), region.stop());
        assert!(!region.contains(region.start()));
    }

    #[test]
    fn should_fire_entered_once_when_crossing_into_range() {
        let mut region = work_hours();
        let log = recording(&mut region);

        assert_eq!(region.check_for_time(t(8, 0)), None);
        assert_eq!(region.check_for_time(t(9, 30)), Some(RegionEventKind::Entered));
        assert_eq!(region.check_for_time(t(10, 0)), None);
        assert_eq!(region.check_for_time(t(16, 0)), None);

        assert_eq!(*log.lock().unwrap(), vec![RegionEventKind::Entered]);
    }

    #[test]
    fn should_not_fire_when_sequence_never_crosses() {
        let mut region = work_hours();
        let log = recording(&mut region);

        for h in [1, 3, 5, 7, 8] {
            region.check_for_time(t(h, 0));
        }
        region.check_for_time(t(9, 0));

        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn should_fire_left_once_until_entered_again() {
        let mut region = work_hours();
        let log = recording(&mut region);

        region.check_for_time(t(12, 0));
        assert_eq!(region.check_for_time(t(17, 0)), Some(RegionEventKind::Left));
        assert_eq!(region.check_for_time(t(18, 0)), None);
        assert_eq!(region.check_for_time(t(23, 0)), None);
        assert_eq!(region.check_for_time(t(10, 0)), Some(RegionEventKind::Entered));
        assert_eq!(region.check_for_time(t(8, 0)), Some(RegionEventKind::Left));

        assert_eq!(
            *log.lock().unwrap(),
            vec![
                RegionEventKind::Entered,
                RegionEventKind::Left,
                RegionEventKind::Entered,
                RegionEventKind::Left,
            ]
        );
    }

    #[test]
    fn should_not_fire_twice_for_identical_value() {
        let mut region = work_hours();
        assert_eq!(region.check_for_time(t(12, 0)), Some(RegionEventKind::Entered));
        assert_eq!(region.check_for_time(t(12, 0)), None);
    }

    #[test]
    fn should_update_last_observed_even_without_event() {
        let mut region = work_hours();
        region.check_for_time(t(7, 45));
        assert_eq!(region.last_observed(), t(7, 45));
    }

    #[test]
    fn should_freeze_state_while_inactive() {
        let mut region = work_hours();
        let log = recording(&mut region);

        region.check_for_time(t(12, 0));
        region.set_active(false);
        assert_eq!(region.check_for_time(t(20, 0)), None);
        assert_eq!(region.check_for_time(t(8, 0)), None);
        assert_eq!(region.last_observed(), t(12, 0));

        region.set_active(true);
        assert_eq!(region.check_for_time(t(13, 0)), None);
        assert_eq!(*log.lock().unwrap(), vec![RegionEventKind::Entered]);
    }

    #[test]
    fn should_fire_on_first_call_after_reactivation_against_stale_base() {
        let mut region = work_hours();
        region.check_for_time(t(12, 0));
        region.set_active(false);
        region.check_for_time(t(20, 0));
        region.set_active(true);

        assert_eq!(region.check_for_time(t(20, 0)), Some(RegionEventKind::Left));
    }

    #[test]
    fn should_never_fire_for_wrapping_range() {
        let mut region = TemporalRegion::builder()
            .start(t(22, 0))
            .stop(t(6, 0))
            .active(true)
            .build();

        for h in [21, 22, 23, 0, 1, 5, 6, 7] {
            assert_eq!(region.check_for_time(t(h, 30)), None);
        }
    }

    #[test]
    fn should_skip_day_gated_call_when_day_not_in_filter() {
        let mut region = work_hours();
        region.set_days([Weekday::Mon, Weekday::Tue]);
        let log = recording(&mut region);

        assert_eq!(region.check_for_time_and_day(t(12, 0), Weekday::Sat), None);
        assert_eq!(region.last_observed(), NaiveTime::MIN);
        assert!(log.lock().unwrap().is_empty());

        assert_eq!(
            region.check_for_time_and_day(t(12, 0), Weekday::Mon),
            Some(RegionEventKind::Entered)
        );
    }

    #[test]
    fn should_never_match_with_empty_day_filter() {
        let mut region = work_hours();
        region.clear_days();
        assert_eq!(region.check_for_time_and_day(t(12, 0), Weekday::Wed), None);
        assert_eq!(region.last_observed(), NaiveTime::MIN);
    }

    #[test]
    fn should_extract_weekday_and_time_from_datetime() {
        let mut region = work_hours();
        region.set_days([Weekday::Fri]);

        // 2026-10-16 is a Friday, 2026-10-17 a Saturday.
        let friday = NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let saturday = NaiveDate::from_ymd_opt(2026, 10, 17)
            .unwrap()
            .and_hms_opt(20, 0, 0)
            .unwrap();

        assert_eq!(
            region.check_for_time_and_date(friday),
            Some(RegionEventKind::Entered)
        );
        assert_eq!(region.check_for_time_and_date(saturday), None);
        assert_eq!(region.last_observed(), t(10, 0));
    }

    #[test]
    fn should_share_state_across_entry_points() {
        let mut region = work_hours();
        region.check_for_time_and_day(t(12, 0), Weekday::Mon);
        assert_eq!(region.check_for_time(t(18, 0)), Some(RegionEventKind::Left));
    }

    #[test]
    fn should_pass_region_details_to_handler() {
        let mut region = work_hours();
        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        region.set_on_entered(move |e| *sink.lock().unwrap() = Some(e.clone()));

        region.check_for_time(t(9, 1));

        let event = seen.lock().unwrap().clone().unwrap();
        assert_eq!(event.kind, RegionEventKind::Entered);
        assert_eq!(event.at, t(9, 1));
        assert_eq!(event.range, TimeRange::new(t(9, 0), t(17, 0)));
        assert_eq!(event.text, "work");
    }

    #[test]
    fn should_compare_equal_on_start_stop_and_text_only() {
        let a = TemporalRegion::builder()
            .start(t(9, 0))
            .stop(t(17, 0))
            .text("work")
            .color(Color::rgb(255, 0, 0))
            .days([Weekday::Mon])
            .build();
        let b = TemporalRegion::builder()
            .start(t(9, 0))
            .stop(t(17, 0))
            .text("work")
            .color(Color::rgb(0, 0, 255))
            .active(true)
            .build();
        assert_eq!(a, b);

        let c = TemporalRegion::builder()
            .start(t(9, 0))
            .stop(t(17, 0))
            .text("play")
            .build();
        assert_ne!(a, c);
    }

    #[test]
    fn should_sort_by_start_keeping_ties_stable() {
        let region = |h, text: &str| {
            TemporalRegion::builder()
                .start(t(h, 0))
                .stop(t(23, 0))
                .text(text)
                .build()
        };
        let mut regions = vec![
            region(22, "night"),
            region(9, "first nine"),
            region(8, "eight"),
            region(9, "second nine"),
        ];

        sort_by_start(&mut regions);

        let texts: Vec<_> = regions.iter().map(TemporalRegion::text).collect();
        assert_eq!(texts, vec!["eight", "first nine", "second nine", "night"]);
    }

    #[test]
    fn should_treat_equal_starts_as_ties() {
        let a = TemporalRegion::new(t(9, 0), t(10, 0));
        let b = TemporalRegion::new(t(9, 0), t(18, 0));
        assert_eq!(compare_by_start(&a, &b), Ordering::Equal);
    }

    #[test]
    fn should_display_text_and_range() {
        assert_eq!(work_hours().to_string(), "work (09:00:00..17:00:00)");
        assert_eq!(
            TemporalRegion::new(t(1, 0), t(2, 0)).to_string(),
            "01:00:00..02:00:00"
        );
    }
}
