//! Host clock abstraction.
//!
//! "Today" is always the local wall-clock date; nothing in the planner
//! compares timestamps to decide which day an entry belongs to.

use std::cell::Cell;

use chrono::{DateTime, Local, NaiveDate, TimeZone};

pub trait Clock {
    fn now(&self) -> DateTime<Local>;

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Reads the operating system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock pinned to a settable instant, for tests and previews.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Cell<DateTime<Local>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Local>) -> Self {
        Self { now: Cell::new(now) }
    }

    /// Pin the clock to noon on `date`.
    pub fn at_date(date: NaiveDate) -> Self {
        Self::new(noon(date))
    }

    pub fn set_date(&self, date: NaiveDate) {
        self.now.set(noon(date));
    }
}

fn noon(date: NaiveDate) -> DateTime<Local> {
    let naive = date.and_hms_opt(12, 0, 0).unwrap_or_default();
    Local
        .from_local_datetime(&naive)
        .earliest()
        .unwrap_or_else(|| Local.from_utc_datetime(&naive))
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_reports_its_date() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let clock = FixedClock::at_date(date);
        assert_eq!(clock.today(), date);

        let next = date.succ_opt().unwrap();
        clock.set_date(next);
        assert_eq!(clock.today(), next);
    }
}
