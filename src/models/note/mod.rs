// Note module

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A titled free-text note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default, with = "crate::utils::date::lenient_timestamp")]
    pub created_at: DateTime<Local>,
}

impl Note {
    /// Both title and content are required.
    pub fn new(id: String, title: &str, content: &str, created_at: DateTime<Local>) -> Option<Self> {
        if title.trim().is_empty() || content.trim().is_empty() {
            return None;
        }

        Some(Self {
            id,
            title: title.to_string(),
            content: content.to_string(),
            created_at,
        })
    }
}
