//! Application context.
//!
//! One `PlannerContext` owns every planner component. The components share
//! the storage backend, the clock and the id source. Rendering and navigation layers receive it
//! by reference; there is no global instance.

use std::rc::Rc;

use anyhow::{Context, Result};

use crate::models::settings::PlannerSettings;
use crate::services::assignment::AssignmentTracker;
use crate::services::calendar::CalendarView;
use crate::services::clock::{Clock, SystemClock};
use crate::services::event::EventStore;
use crate::services::id::{IdGenerator, TimestampIdGenerator};
use crate::services::note::NoteBoard;
use crate::services::settings::resolve_database_path;
use crate::services::storage::{KeyValueStorage, SqliteStorage};
use crate::services::timer::StudyTimer;
use crate::services::todo::TodoList;

pub struct PlannerContext {
    pub calendar: CalendarView,
    pub todos: TodoList,
    pub notes: NoteBoard,
    pub assignments: AssignmentTracker,
    pub timer: StudyTimer,
}

impl PlannerContext {
    /// Load every component from `storage`.
    pub fn new(
        storage: Rc<dyn KeyValueStorage>,
        clock: Rc<dyn Clock>,
        ids: Rc<dyn IdGenerator>,
        settings: &PlannerSettings,
    ) -> Self {
        let events = EventStore::load(storage.clone(), clock.clone(), ids.clone());

        Self {
            calendar: CalendarView::new(events, clock.clone()),
            todos: TodoList::load(storage.clone(), clock.clone(), ids.clone()),
            notes: NoteBoard::load(storage.clone(), clock.clone(), ids.clone()),
            assignments: AssignmentTracker::load(storage.clone(), clock, ids),
            timer: StudyTimer::load(storage, settings.timer_defaults()),
        }
    }

    /// Open the SQLite database named by `settings` with the system clock.
    pub fn open(settings: &PlannerSettings) -> Result<Self> {
        let path = resolve_database_path(settings);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory {}", parent.display()))?;
        }

        let path_str = path.to_string_lossy();
        let storage = SqliteStorage::open(&path_str)?;
        log::info!("Opened planner storage at {}", path.display());

        let clock: Rc<dyn Clock> = Rc::new(SystemClock);
        let ids = Rc::new(TimestampIdGenerator::new(clock.clone()));
        Ok(Self::new(Rc::new(storage), clock, ids, settings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::clock::FixedClock;
    use crate::services::id::SequentialIdGenerator;
    use crate::services::storage::{keys, MemoryStorage};
    use chrono::NaiveDate;
    use tempfile::tempdir;

    #[test]
    fn test_components_share_one_storage() {
        let storage = Rc::new(MemoryStorage::new());
        let clock = Rc::new(FixedClock::at_date(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()));
        let mut ctx = PlannerContext::new(
            storage.clone(),
            clock,
            Rc::new(SequentialIdGenerator::default()),
            &PlannerSettings::default(),
        );

        ctx.calendar.add_event("Exam", "2025-01-12", None, None);
        ctx.todos.add("revise");
        ctx.notes.add("Week 2", "Recursion");
        ctx.assignments.add("Essay", None, "2025-02-01", None);
        ctx.timer.set_break_minutes(10);

        for key in [
            keys::EVENTS,
            keys::TODOS,
            keys::NOTES,
            keys::ASSIGNMENTS,
            keys::TIMER_SETTINGS,
        ] {
            assert!(storage.raw(key).is_some(), "{key} should be written");
        }
    }

    #[test]
    fn test_open_creates_database_file() {
        let dir = tempdir().unwrap();
        let settings = PlannerSettings {
            database_path: Some(dir.path().join("data").join("planner.db")),
            ..PlannerSettings::default()
        };

        let mut ctx = PlannerContext::open(&settings).unwrap();
        ctx.todos.add("persist me");
        drop(ctx);

        let ctx = PlannerContext::open(&settings).unwrap();
        assert_eq!(ctx.todos.todos()[0].text, "persist me");
    }
}
