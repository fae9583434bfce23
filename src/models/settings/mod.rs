// Settings module
// User configuration read from planner.toml

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::timer::{
    TimerSettings, DEFAULT_BREAK_MINUTES, DEFAULT_STUDY_MINUTES, MAX_BREAK_MINUTES,
    MAX_STUDY_MINUTES,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerSettings {
    /// SQLite file holding all planner data. Resolved from the platform
    /// data directory when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,
    pub default_study_minutes: u32,
    pub default_break_minutes: u32,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            database_path: None,
            default_study_minutes: DEFAULT_STUDY_MINUTES,
            default_break_minutes: DEFAULT_BREAK_MINUTES,
        }
    }
}

impl PlannerSettings {
    /// Validate settings values
    pub fn validate(&self) -> Result<(), String> {
        if self.default_study_minutes == 0 || self.default_study_minutes > MAX_STUDY_MINUTES {
            return Err("Study length must be between 1 and 240 minutes".to_string());
        }
        if self.default_break_minutes == 0 || self.default_break_minutes > MAX_BREAK_MINUTES {
            return Err("Break length must be between 1 and 120 minutes".to_string());
        }
        Ok(())
    }

    /// Timer lengths used until the user saves their own.
    pub fn timer_defaults(&self) -> TimerSettings {
        TimerSettings {
            study_time: self.default_study_minutes,
            break_time: self.default_break_minutes,
        }
        .normalized()
    }
}
