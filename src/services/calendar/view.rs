//! Calendar View: composes the Event Store with the month grid.
//!
//! Both projections (the day grid and the upcoming-events list) are derived
//! from scratch from the store on every read, so they can never disagree
//! after a mutation. Each mutating call returns a [`Redraw`] telling the
//! rendering layer which projections it must fetch again.

use std::collections::HashMap;
use std::rc::Rc;

use chrono::{Datelike, NaiveDate};

use super::grid::{build_month_grid, GridDay};
use crate::models::day_cell::DayCell;
use crate::models::event::{Event, EventDraft, Rejection};
use crate::services::clock::Clock;
use crate::services::event::EventStore;
use crate::utils::date::{first_of_month, month_name, shift_month};

pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Projections made stale by a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    None,
    Grid,
    All,
}

impl Redraw {
    pub fn grid_stale(self) -> bool {
        matches!(self, Redraw::Grid | Redraw::All)
    }

    pub fn upcoming_stale(self) -> bool {
        matches!(self, Redraw::All)
    }
}

/// Result of an add-event request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddEventOutcome {
    Added(String),
    Rejected(Rejection),
}

impl AddEventOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, AddEventOutcome::Added(_))
    }

    pub fn redraw(&self) -> Redraw {
        match self {
            AddEventOutcome::Added(_) => Redraw::All,
            AddEventOutcome::Rejected(_) => Redraw::None,
        }
    }
}

/// Everything a renderer needs for one frame, derived against a single "today".
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarSnapshot {
    pub label: String,
    pub today: NaiveDate,
    pub grid: Vec<DayCell>,
    pub upcoming: Vec<Event>,
}

pub struct CalendarView {
    store: EventStore,
    clock: Rc<dyn Clock>,
    /// Always the 1st of the displayed month.
    reference: NaiveDate,
}

impl CalendarView {
    /// Create a view showing the clock's current month.
    pub fn new(store: EventStore, clock: Rc<dyn Clock>) -> Self {
        let reference = first_of_month(clock.today());
        Self {
            store,
            clock,
            reference,
        }
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    /// First day of the displayed month.
    pub fn reference_month(&self) -> NaiveDate {
        self.reference
    }

    /// e.g. "October 2026"
    pub fn month_label(&self) -> String {
        format!("{} {}", month_name(self.reference.month()), self.reference.year())
    }

    pub fn weekday_headers(&self) -> [&'static str; 7] {
        WEEKDAY_HEADERS
    }

    pub fn render_grid(&self) -> Vec<DayCell> {
        attach_events(
            build_month_grid(self.reference),
            self.store.events(),
            self.clock.today(),
        )
    }

    pub fn render_upcoming(&self) -> Vec<Event> {
        upcoming_events(self.store.events(), self.clock.today())
    }

    /// Grid and upcoming list derived against the same "today".
    pub fn snapshot(&self) -> CalendarSnapshot {
        let today = self.clock.today();
        CalendarSnapshot {
            label: self.month_label(),
            today,
            grid: attach_events(build_month_grid(self.reference), self.store.events(), today),
            upcoming: upcoming_events(self.store.events(), today),
        }
    }

    pub fn add_event(
        &mut self,
        title: &str,
        date: &str,
        time: Option<&str>,
        description: Option<&str>,
    ) -> AddEventOutcome {
        let mut draft = EventDraft::new(title, date);
        if let Some(time) = time {
            draft = draft.time(time);
        }
        if let Some(description) = description {
            draft = draft.description(description);
        }
        self.add_draft(draft)
    }

    pub fn add_draft(&mut self, draft: EventDraft) -> AddEventOutcome {
        match self.store.add(draft) {
            Ok(id) => AddEventOutcome::Added(id),
            Err(rejection) => {
                log::debug!("Event rejected: {}", rejection);
                AddEventOutcome::Rejected(rejection)
            }
        }
    }

    /// Delete from either projection. Idempotent.
    pub fn delete_event(&mut self, id: &str) -> Redraw {
        self.store.delete(id);
        Redraw::All
    }

    /// Move the displayed month by `delta` months, rolling the year as needed.
    pub fn navigate_month(&mut self, delta: i32) -> Redraw {
        self.reference = shift_month(self.reference, delta);
        log::debug!("Showing {}", self.month_label());
        Redraw::Grid
    }

    pub fn go_to_today(&mut self) -> Redraw {
        self.reference = first_of_month(self.clock.today());
        Redraw::Grid
    }
}

/// Attach events to grid days by date, keeping store order within a day.
fn attach_events(grid: Vec<GridDay>, events: &[Event], today: NaiveDate) -> Vec<DayCell> {
    let mut by_day: HashMap<NaiveDate, Vec<Event>> = HashMap::new();
    for event in events {
        by_day.entry(event.date).or_default().push(event.clone());
    }

    grid.into_iter()
        .map(|day| DayCell {
            date: day.date,
            in_displayed_month: day.in_displayed_month,
            is_today: day.date == today,
            events: by_day.remove(&day.date).unwrap_or_default(),
        })
        .collect()
}

/// Events on or after `today`, ascending by date; same-day events keep store order.
fn upcoming_events(events: &[Event], today: NaiveDate) -> Vec<Event> {
    let mut upcoming: Vec<Event> = events
        .iter()
        .filter(|event| event.date >= today)
        .cloned()
        .collect();
    upcoming.sort_by_key(|event| event.date);
    upcoming
}
