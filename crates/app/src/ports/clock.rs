//! Clock port — where a driver reads "now" from.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{NaiveDateTime, TimeDelta};
use regionwatch_domain::time::now_local;

/// Source of the local civil date and time fed to regions.
pub trait Clock {
    /// The current instant, without zone information.
    fn now(&self) -> NaiveDateTime;
}

impl<T: Clock + ?Sized> Clock for Arc<T> {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

/// Reads the operating system's local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        now_local()
    }
}

/// A clock that only moves when told to.
///
/// Shared behind an [`Arc`], one handle can drive a monitor while another
/// sets or advances the time (replays, demos, tests).
#[derive(Debug)]
pub struct SimulatedClock {
    now: Mutex<NaiveDateTime>,
}

impl SimulatedClock {
    #[must_use]
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Jump to `instant`, forwards or backwards.
    pub fn set(&self, instant: NaiveDateTime) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = instant;
    }

    /// Move the clock by `delta` and return the new instant.
    pub fn advance(&self, delta: TimeDelta) -> NaiveDateTime {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += delta;
        *now
    }
}

impl Clock for SimulatedClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
