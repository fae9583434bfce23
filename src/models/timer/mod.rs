// Study timer models

use serde::{Deserialize, Serialize};

pub const DEFAULT_STUDY_MINUTES: u32 = 25;
pub const DEFAULT_BREAK_MINUTES: u32 = 5;
pub const MAX_STUDY_MINUTES: u32 = 240;
pub const MAX_BREAK_MINUTES: u32 = 120;

/// Persisted phase lengths, in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerSettings {
    pub study_time: u32,
    pub break_time: u32,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            study_time: DEFAULT_STUDY_MINUTES,
            break_time: DEFAULT_BREAK_MINUTES,
        }
    }
}

impl TimerSettings {
    /// Replace zero lengths with the defaults and cap overlong ones.
    pub fn normalized(self) -> Self {
        Self {
            study_time: bounded(self.study_time, DEFAULT_STUDY_MINUTES, MAX_STUDY_MINUTES),
            break_time: bounded(self.break_time, DEFAULT_BREAK_MINUTES, MAX_BREAK_MINUTES),
        }
    }

    pub fn seconds_for(&self, mode: TimerMode) -> u32 {
        let minutes = match mode {
            TimerMode::Study => self.study_time,
            TimerMode::Break => self.break_time,
        };
        minutes.saturating_mul(60)
    }
}

fn bounded(minutes: u32, default: u32, max: u32) -> u32 {
    match minutes {
        0 => default,
        m => m.min(max),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerMode {
    Study,
    Break,
}

impl TimerMode {
    pub fn label(&self) -> &'static str {
        match self {
            TimerMode::Study => "Study Time",
            TimerMode::Break => "Break Time",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            TimerMode::Study => TimerMode::Break,
            TimerMode::Break => TimerMode::Study,
        }
    }
}
