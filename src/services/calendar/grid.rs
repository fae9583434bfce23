//! Month Grid Builder.
//!
//! Produces whole weeks (Sunday first) covering one month: the tail of the
//! previous month, every day of the month, then the head of the next month.
//! The grid never contains a partial week.

use chrono::{Datelike, Days, NaiveDate};

use crate::utils::date::{days_in_month, first_of_month};

/// One slot of the month grid before events are attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDay {
    pub date: NaiveDate,
    pub in_displayed_month: bool,
}

/// Build the grid for the month containing `reference`. The day component is ignored.
///
/// Returns an empty grid when the padded weeks would run past the range of
/// representable dates, so a non-empty grid is always whole weeks.
pub fn build_month_grid(reference: NaiveDate) -> Vec<GridDay> {
    let first = first_of_month(reference);
    let (year, month) = (first.year(), first.month());

    let leading = first.weekday().num_days_from_sunday();
    let month_len = days_in_month(year, month);
    let filled = leading + month_len;
    let trailing = filled.div_ceil(7) * 7 - filled;
    let total = (filled + trailing) as usize;

    let Some(start) = first.checked_sub_days(Days::new(u64::from(leading))) else {
        log::warn!("Grid for {} starts before the earliest date", first);
        return Vec::new();
    };
    if start.checked_add_days(Days::new(total as u64 - 1)).is_none() {
        log::warn!("Grid for {} ends after the latest date", first);
        return Vec::new();
    }

    start
        .iter_days()
        .take(total)
        .map(|date| GridDay {
            date,
            in_displayed_month: date.year() == year && date.month() == month,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::date::shift_month;
    use test_case::test_case;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_january_2025_layout() {
        // Jan 1 2025 is a Wednesday: 3 leading days, 31 days, 1 trailing day.
        let grid = build_month_grid(date(2025, 1, 17));

        assert_eq!(grid.len(), 35);
        assert_eq!(grid[0].date, date(2024, 12, 29));
        assert!(!grid[0].in_displayed_month);
        assert_eq!(grid[3].date, date(2025, 1, 1));
        assert!(grid[3].in_displayed_month);
        assert_eq!(grid[34].date, date(2025, 2, 1));
        assert!(!grid[34].in_displayed_month);
    }

    #[test]
    fn test_month_starting_on_sunday_has_no_leading_days() {
        // Jun 1 2025 is a Sunday.
        let grid = build_month_grid(date(2025, 6, 1));
        assert_eq!(grid[0].date, date(2025, 6, 1));
        assert!(grid[0].in_displayed_month);
    }

    #[test]
    fn test_february_that_fills_exactly_four_weeks() {
        // Feb 1 2015 is a Sunday and 2015 is not a leap year.
        let grid = build_month_grid(date(2015, 2, 10));
        assert_eq!(grid.len(), 28);
        assert!(grid.iter().all(|day| day.in_displayed_month));
    }

    #[test]
    fn test_six_week_month() {
        // Mar 1 2025 is a Saturday: 6 leading + 31 days = 37 -> 42 cells.
        let grid = build_month_grid(date(2025, 3, 1));
        assert_eq!(grid.len(), 42);
        assert_eq!(grid.last().unwrap().date, date(2025, 4, 5));
    }

    #[test_case(2024, 2, 29; "leap february")]
    #[test_case(2023, 2, 28; "common february")]
    #[test_case(2025, 12, 31; "december")]
    #[test_case(2025, 11, 30; "november")]
    fn test_in_month_count_matches_month_length(year: i32, month: u32, expected: usize) {
        let grid = build_month_grid(date(year, month, 1));
        assert_eq!(grid.iter().filter(|day| day.in_displayed_month).count(), expected);
    }

    #[test]
    fn test_december_grid_crosses_into_next_year() {
        // Dec 31 2025 is a Wednesday, so Jan 1-3 2026 trail.
        let grid = build_month_grid(date(2025, 12, 1));
        assert_eq!(grid.last().unwrap().date, date(2026, 1, 3));
    }

    #[test]
    fn test_unrepresentable_months_yield_empty_grid() {
        assert!(build_month_grid(NaiveDate::MIN).is_empty());
        assert!(build_month_grid(NaiveDate::MAX).is_empty());
    }

    #[test]
    fn test_months_next_to_the_limits_are_whole_weeks() {
        for reference in [
            shift_month(NaiveDate::MIN, 1),
            shift_month(NaiveDate::MAX, -1),
        ] {
            let grid = build_month_grid(reference);
            assert!(!grid.is_empty(), "{reference}");
            assert_eq!(grid.len() % 7, 0, "{reference}");
        }
    }
}
