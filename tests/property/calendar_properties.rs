// Property-based tests for the month grid and calendar view
// Exercises grid completion, contiguity and event bucketing over random months

#[path = "../fixtures/mod.rs"]
mod fixtures;

use chrono::{Datelike, Days, NaiveDate};
use proptest::prelude::*;
use std::collections::HashMap;
use study_planner::services::calendar::build_month_grid;
use study_planner::utils::date::{canonical_date, days_in_month};

fn reference_date() -> impl Strategy<Value = NaiveDate> {
    (1900..2200i32, 1..=12u32, 1..=28u32)
        .prop_map(|(year, month, day)| NaiveDate::from_ymd_opt(year, month, day).unwrap())
}

proptest! {
    /// Property: the grid is always a positive number of whole weeks
    #[test]
    fn prop_grid_is_whole_weeks(reference in reference_date()) {
        let grid = build_month_grid(reference);
        prop_assert!(!grid.is_empty());
        prop_assert_eq!(grid.len() % 7, 0);
        prop_assert!(grid.len() <= 42);
    }

    /// Property: in-month cells equal the month's length
    #[test]
    fn prop_in_month_count_matches_days_in_month(reference in reference_date()) {
        let grid = build_month_grid(reference);
        let in_month = grid.iter().filter(|day| day.in_displayed_month).count();
        prop_assert_eq!(in_month as u32, days_in_month(reference.year(), reference.month()));
    }

    /// Property: consecutive cells are consecutive days, starting on a Sunday
    #[test]
    fn prop_cells_are_contiguous(reference in reference_date()) {
        let grid = build_month_grid(reference);
        prop_assert_eq!(grid[0].date.weekday().num_days_from_sunday(), 0);
        for pair in grid.windows(2) {
            prop_assert_eq!(pair[1].date, pair[0].date + Days::new(1));
        }
    }

    /// Property: every event dated inside the grid lands in exactly one cell
    #[test]
    fn prop_events_attached_exactly_once(
        reference in reference_date(),
        offsets in proptest::collection::vec(0usize..42, 0..20),
    ) {
        let span = build_month_grid(reference);
        let mut calendar = fixtures::calendar_at(reference);

        for (i, offset) in offsets.iter().enumerate() {
            let date = span[offset % span.len()].date;
            let outcome = calendar.add_event(&format!("event {i}"), &canonical_date(date), None, None);
            prop_assert!(outcome.is_added());
        }

        let grid = calendar.render_grid();
        let mut seen: HashMap<String, usize> = HashMap::new();
        for cell in &grid {
            for event in &cell.events {
                prop_assert_eq!(event.date, cell.date);
                *seen.entry(event.id.clone()).or_default() += 1;
            }
        }

        prop_assert_eq!(seen.len(), calendar.store().len());
        prop_assert!(seen.values().all(|count| *count == 1));
    }

    /// Property: the upcoming list never holds past events and is sorted
    #[test]
    fn prop_upcoming_is_future_and_sorted(
        day_offsets in proptest::collection::vec(-60i64..60, 0..20),
    ) {
        let today = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let mut calendar = fixtures::calendar_at(today);
        for (i, offset) in day_offsets.iter().enumerate() {
            let date = today + chrono::Duration::days(*offset);
            calendar.add_event(&format!("event {i}"), &canonical_date(date), None, None);
        }

        let upcoming = calendar.render_upcoming();
        prop_assert!(upcoming.iter().all(|event| event.date >= today));
        prop_assert!(upcoming.windows(2).all(|pair| pair[0].date <= pair[1].date));
        prop_assert_eq!(
            upcoming.len(),
            day_offsets.iter().filter(|offset| **offset >= 0).count()
        );
    }

    /// Property: rejected adds never change the store
    #[test]
    fn prop_rejected_add_is_noop(title in "[a-z]{0,8}", use_date in any::<bool>()) {
        let mut calendar = fixtures::calendar_at(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());
        calendar.add_event("keep", "2025-01-11", None, None);
        let before = calendar.store().events().to_vec();

        let date = if use_date { "2025-01-12" } else { "" };
        let outcome = calendar.add_event(&title, date, None, None);

        if title.is_empty() || !use_date {
            prop_assert!(!outcome.is_added());
            prop_assert_eq!(calendar.store().events(), before.as_slice());
        } else {
            prop_assert!(outcome.is_added());
        }
    }
}
