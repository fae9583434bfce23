// Todo module

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A checklist entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, with = "crate::utils::date::lenient_timestamp")]
    pub created_at: DateTime<Local>,
}

impl Todo {
    /// Build a todo from raw input, trimming the text.
    /// Returns `None` when nothing but whitespace was entered.
    pub fn new(id: String, text: &str, created_at: DateTime<Local>) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        Some(Self {
            id,
            text: text.to_string(),
            completed: false,
            created_at,
        })
    }
}
