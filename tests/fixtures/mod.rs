// Test fixtures - reusable test data
// Builds planner contexts over in-memory storage with a pinned clock

#![allow(dead_code)]

use std::rc::Rc;

use chrono::NaiveDate;
use study_planner::models::settings::PlannerSettings;
use study_planner::services::calendar::CalendarView;
use study_planner::services::clock::{Clock, FixedClock};
use study_planner::services::event::EventStore;
use study_planner::services::id::SequentialIdGenerator;
use study_planner::services::storage::{KeyValueStorage, MemoryStorage};
use study_planner::PlannerContext;

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// Jan 10, 2025 - the "today" used across upcoming-event tests
    pub fn jan_10_2025() -> NaiveDate {
        date(2025, 1, 10)
    }

    /// Dec 31, 2025 (New Year's Eve)
    pub fn new_years_eve_2025() -> NaiveDate {
        date(2025, 12, 31)
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        date(2024, 2, 29)
    }
}

/// A calendar view over fresh in-memory storage.
pub fn calendar_at(today: NaiveDate) -> CalendarView {
    calendar_over(Rc::new(MemoryStorage::new()), today)
}

pub fn calendar_over(storage: Rc<dyn KeyValueStorage>, today: NaiveDate) -> CalendarView {
    let clock: Rc<dyn Clock> = Rc::new(FixedClock::at_date(today));
    let store = EventStore::load(storage, clock.clone(), Rc::new(SequentialIdGenerator::default()));
    CalendarView::new(store, clock)
}

pub fn context_over(storage: Rc<dyn KeyValueStorage>, today: NaiveDate) -> PlannerContext {
    PlannerContext::new(
        storage,
        Rc::new(FixedClock::at_date(today)),
        Rc::new(SequentialIdGenerator::default()),
        &PlannerSettings::default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_fixture_dates_are_valid() {
        assert_eq!(dates::jan_10_2025().day(), 10);
        assert_eq!(dates::new_years_eve_2025().month(), 12);
        assert_eq!(dates::leap_day_2024().day(), 29);
    }
}
