//! Notes backed by the `notes` storage key.

use std::rc::Rc;

use crate::models::note::Note;
use crate::services::clock::Clock;
use crate::services::id::IdGenerator;
use crate::services::persistence::{Record, RecordList};
use crate::services::storage::{keys, KeyValueStorage};

impl Record for Note {
    fn id(&self) -> &str {
        &self.id
    }
}

pub struct NoteBoard {
    notes: RecordList<Note>,
    clock: Rc<dyn Clock>,
    ids: Rc<dyn IdGenerator>,
}

impl NoteBoard {
    pub fn load(
        storage: Rc<dyn KeyValueStorage>,
        clock: Rc<dyn Clock>,
        ids: Rc<dyn IdGenerator>,
    ) -> Self {
        Self {
            notes: RecordList::load(storage, keys::NOTES),
            clock,
            ids,
        }
    }

    pub fn notes(&self) -> &[Note] {
        self.notes.records()
    }

    /// Add a note; both title and content must be non-empty.
    pub fn add(&mut self, title: &str, content: &str) -> Option<String> {
        let note = Note::new(self.ids.next_id(), title, content, self.clock.now())?;
        let id = note.id.clone();
        self.notes.push(note);
        Some(id)
    }

    pub fn delete(&mut self, id: &str) {
        self.notes.remove(id);
    }

    /// Newest first.
    pub fn sorted(&self) -> Vec<Note> {
        let mut notes = self.notes.records().to_vec();
        notes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        notes
    }
}
