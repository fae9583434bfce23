// Assignment module
// Coursework item with a due date

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::utils::date::parse_canonical_date;

/// Kind shown when the form leaves the type blank.
pub const DEFAULT_ASSIGNMENT_KIND: &str = "Other";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: String,
    pub title: String,
    /// Free-form category such as "Essay" or "Lab".
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    #[serde(with = "crate::utils::date::canonical")]
    pub due_date: NaiveDate,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, with = "crate::utils::date::lenient_timestamp")]
    pub created_at: DateTime<Local>,
}

fn default_kind() -> String {
    DEFAULT_ASSIGNMENT_KIND.to_string()
}

impl Assignment {
    /// Build an assignment from form input.
    /// Title and a canonical due date are required; anything else is optional.
    pub fn new(
        id: String,
        title: &str,
        kind: Option<&str>,
        due_date: &str,
        description: Option<&str>,
        created_at: DateTime<Local>,
    ) -> Option<Self> {
        if title.trim().is_empty() {
            return None;
        }
        let due_date = parse_canonical_date(due_date)?;
        let kind = kind
            .map(str::trim)
            .filter(|kind| !kind.is_empty())
            .map(str::to_string)
            .unwrap_or_else(default_kind);

        Some(Self {
            id,
            title: title.to_string(),
            kind,
            due_date,
            description: description.unwrap_or_default().to_string(),
            completed: false,
            created_at,
        })
    }

    /// Open and due strictly before `today`.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date < today
    }
}
