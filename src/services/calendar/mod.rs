//! Month calendar: grid construction and the view that attaches events to it.

pub mod grid;
pub mod view;

pub use grid::{build_month_grid, GridDay};
pub use view::{AddEventOutcome, CalendarSnapshot, CalendarView, Redraw};
