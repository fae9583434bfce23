// Day cell module
// One derived slot of the month grid

use chrono::NaiveDate;

use super::event::Event;
use crate::utils::date::canonical_date;

/// A single day in the rendered month grid.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// False for overshoot days borrowed from the previous or next month.
    pub in_displayed_month: bool,
    pub is_today: bool,
    /// Events dated on this day, in store order.
    pub events: Vec<Event>,
}

impl DayCell {
    pub fn is_overshoot(&self) -> bool {
        !self.in_displayed_month
    }

    pub fn date_key(&self) -> String {
        canonical_date(self.date)
    }

    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }
}
