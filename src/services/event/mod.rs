//! Event Store: the canonical, durably persisted list of calendar events.
//!
//! The store knows nothing about grids or projections. It loads once,
//! appends and removes in place, and flushes the whole list after every
//! mutation.

use std::rc::Rc;

use crate::models::event::{Event, EventDraft, Rejection};
use crate::services::clock::Clock;
use crate::services::id::IdGenerator;
use crate::services::persistence::{Record, RecordList};
use crate::services::storage::{keys, KeyValueStorage};

impl Record for Event {
    fn id(&self) -> &str {
        &self.id
    }
}

pub struct EventStore {
    events: RecordList<Event>,
    clock: Rc<dyn Clock>,
    ids: Rc<dyn IdGenerator>,
}

impl EventStore {
    /// Load events from storage. Absent or malformed state yields an empty store.
    pub fn load(
        storage: Rc<dyn KeyValueStorage>,
        clock: Rc<dyn Clock>,
        ids: Rc<dyn IdGenerator>,
    ) -> Self {
        let events = RecordList::load(storage, keys::EVENTS);
        log::info!("Event store loaded with {} events", events.len());
        Self { events, clock, ids }
    }

    /// Events in insertion order.
    pub fn events(&self) -> &[Event] {
        self.events.records()
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.get(id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Append a new event and persist. A draft missing its title or date
    /// leaves the store untouched.
    /// Returns the new event's id.
    pub fn add(&mut self, draft: EventDraft) -> Result<String, Rejection> {
        draft.validate()?;

        let event = draft.into_event(self.ids.next_id(), self.clock.now())?;
        let id = event.id.clone();
        log::debug!("Adding event {} on {}", id, event.date_key());
        self.events.push(event);

        Ok(id)
    }

    /// Remove every event with `id` and persist. Unknown ids are a no-op.
    pub fn delete(&mut self, id: &str) -> usize {
        let removed = self.events.remove(id);
        if removed == 0 {
            log::debug!("Delete requested for unknown event {}", id);
        }
        removed
    }
}
