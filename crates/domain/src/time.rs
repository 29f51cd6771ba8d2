//! Local civil clock reads.
//!
//! Regions compare plain time-of-day values with an independent weekday
//! tag; no time zone is ever attached. These helpers are the only place
//! the domain reads the system clock (used for parse/builder defaults).

use chrono::{Local, NaiveDateTime, NaiveTime};

/// Current local date and time, without zone information.
#[must_use]
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Current local time of day.
#[must_use]
pub fn now_local_time() -> NaiveTime {
    now_local().time()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_current_local_time() {
        let before = Local::now().naive_local();
        let ts = now_local();
        let after = Local::now().naive_local();
        assert!(ts >= before);
        assert!(ts <= after);
    }
}
