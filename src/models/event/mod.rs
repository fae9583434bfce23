// Event module
// Single-day calendar entry keyed by its canonical date

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::date::{canonical_date, parse_canonical_date};

/// A user-created calendar entry.
///
/// Events never change after creation; the only mutation is deletion by `id`.
/// Field names serialize in camelCase so lists written by earlier planner
/// builds load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(with = "crate::utils::date::canonical")]
    pub date: NaiveDate,
    /// Free-text clock string, display only. Empty when not given.
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, with = "crate::utils::date::lenient_timestamp")]
    pub created_at: DateTime<Local>,
}

impl Event {
    /// Start a draft for a new event.
    ///
    /// # Examples
    /// ```
    /// use study_planner::models::event::Event;
    /// use chrono::Local;
    ///
    /// let event = Event::draft("Exam", "2025-01-10")
    ///     .time("09:00")
    ///     .into_event("1".to_string(), Local::now())
    ///     .unwrap();
    /// assert_eq!(event.date_key(), "2025-01-10");
    /// ```
    pub fn draft(title: impl Into<String>, date: impl Into<String>) -> EventDraft {
        EventDraft::new(title, date)
    }

    /// Canonical `YYYY-MM-DD` key used for day bucketing.
    pub fn date_key(&self) -> String {
        canonical_date(self.date)
    }

    pub fn time(&self) -> Option<&str> {
        non_empty(&self.time)
    }

    pub fn description(&self) -> Option<&str> {
        non_empty(&self.description)
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Why an add-event request was turned away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    MissingTitle,
    MissingDate,
    InvalidDate(String),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::MissingTitle => write!(f, "event title is required"),
            Rejection::MissingDate => write!(f, "event date is required"),
            Rejection::InvalidDate(raw) => write!(f, "'{raw}' is not a YYYY-MM-DD date"),
        }
    }
}

/// Unvalidated form input for a new event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    title: String,
    date: String,
    time: Option<String>,
    description: Option<String>,
}

impl EventDraft {
    pub fn new(title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            time: None,
            description: None,
        }
    }

    /// Set the display time
    pub fn time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    /// Set the event description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Check required fields and return the parsed date.
    pub fn validate(&self) -> Result<NaiveDate, Rejection> {
        if self.title.trim().is_empty() {
            return Err(Rejection::MissingTitle);
        }
        if self.date.trim().is_empty() {
            return Err(Rejection::MissingDate);
        }
        parse_canonical_date(&self.date).ok_or_else(|| Rejection::InvalidDate(self.date.clone()))
    }

    /// Turn the draft into an event with the given identity.
    pub fn into_event(self, id: String, created_at: DateTime<Local>) -> Result<Event, Rejection> {
        let date = self.validate()?;

        Ok(Event {
            id,
            title: self.title.trim().to_string(),
            date,
            time: self.time.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            created_at,
        })
    }
}
