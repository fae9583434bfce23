//! Study timer: alternating study and break phases.
//!
//! The timer owns no thread. The host calls [`StudyTimer::tick`] once per
//! second while the timer is running and reacts to the returned outcome.

use std::rc::Rc;

use crate::models::timer::{TimerMode, TimerSettings};
use crate::services::persistence::{flush, load_value};
use crate::services::storage::{keys, KeyValueStorage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer is paused; nothing happened.
    Idle,
    /// One second elapsed.
    Counting,
    /// The phase ran out and the timer switched to the other mode.
    PhaseComplete(TimerMode),
}

pub struct StudyTimer {
    storage: Rc<dyn KeyValueStorage>,
    settings: TimerSettings,
    time_left: u32,
    running: bool,
    mode: TimerMode,
}

impl StudyTimer {
    /// Load persisted settings, falling back to `defaults` when none were saved.
    pub fn load(storage: Rc<dyn KeyValueStorage>, defaults: TimerSettings) -> Self {
        let settings =
            load_value(storage.as_ref(), keys::TIMER_SETTINGS, defaults).normalized();

        Self {
            storage,
            settings,
            time_left: settings.seconds_for(TimerMode::Study),
            running: false,
            mode: TimerMode::Study,
        }
    }

    pub fn settings(&self) -> TimerSettings {
        self.settings
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn mode_label(&self) -> &'static str {
        self.mode.label()
    }

    /// Start or pause. Returns the new running state.
    pub fn toggle(&mut self) -> bool {
        self.running = !self.running;
        self.running
    }

    /// Stop and rewind to a full study phase.
    pub fn reset(&mut self) {
        self.running = false;
        self.mode = TimerMode::Study;
        self.time_left = self.settings.seconds_for(TimerMode::Study);
    }

    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }

        if self.time_left > 0 {
            self.time_left -= 1;
            return TickOutcome::Counting;
        }

        self.mode = self.mode.toggled();
        self.time_left = self.settings.seconds_for(self.mode);
        log::info!("Timer switched to {}", self.mode.label());
        TickOutcome::PhaseComplete(self.mode)
    }

    /// Change the study length. Zero falls back to the default and lengths
    /// above 240 minutes are capped. While paused the countdown restarts at the new length.
    pub fn set_study_minutes(&mut self, minutes: u32) {
        self.settings = TimerSettings {
            study_time: minutes,
            ..self.settings
        }
        .normalized();
        self.save();

        if !self.running {
            self.time_left = self.settings.seconds_for(TimerMode::Study);
        }
    }

    /// Change the break length. Zero falls back to the default; capped at 120 minutes.
    pub fn set_break_minutes(&mut self, minutes: u32) {
        self.settings = TimerSettings {
            break_time: minutes,
            ..self.settings
        }
        .normalized();
        self.save();
    }

    /// `MM:SS`
    pub fn display(&self) -> String {
        format!("{:02}:{:02}", self.time_left / 60, self.time_left % 60)
    }

    fn save(&self) {
        flush(self.storage.as_ref(), keys::TIMER_SETTINGS, &self.settings);
    }
}
