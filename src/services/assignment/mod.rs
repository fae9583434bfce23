//! Assignment tracker backed by the `assignments` storage key.

use std::rc::Rc;

use chrono::NaiveDate;

use crate::models::assignment::Assignment;
use crate::services::clock::Clock;
use crate::services::id::IdGenerator;
use crate::services::persistence::{Record, RecordList};
use crate::services::storage::{keys, KeyValueStorage};

impl Record for Assignment {
    fn id(&self) -> &str {
        &self.id
    }
}

pub struct AssignmentTracker {
    assignments: RecordList<Assignment>,
    clock: Rc<dyn Clock>,
    ids: Rc<dyn IdGenerator>,
}

impl AssignmentTracker {
    pub fn load(
        storage: Rc<dyn KeyValueStorage>,
        clock: Rc<dyn Clock>,
        ids: Rc<dyn IdGenerator>,
    ) -> Self {
        Self {
            assignments: RecordList::load(storage, keys::ASSIGNMENTS),
            clock,
            ids,
        }
    }

    pub fn assignments(&self) -> &[Assignment] {
        self.assignments.records()
    }

    /// Add an assignment. Title and a `YYYY-MM-DD` due date are required.
    pub fn add(
        &mut self,
        title: &str,
        kind: Option<&str>,
        due_date: &str,
        description: Option<&str>,
    ) -> Option<String> {
        let assignment = Assignment::new(
            self.ids.next_id(),
            title,
            kind,
            due_date,
            description,
            self.clock.now(),
        )?;
        let id = assignment.id.clone();
        self.assignments.push(assignment);
        Some(id)
    }

    pub fn toggle(&mut self, id: &str) -> bool {
        self.assignments
            .update(id, |assignment| assignment.completed = !assignment.completed)
            > 0
    }

    pub fn delete(&mut self, id: &str) {
        self.assignments.remove(id);
    }

    /// Soonest due first; equal due dates keep insertion order.
    pub fn sorted(&self) -> Vec<Assignment> {
        let mut assignments = self.assignments.records().to_vec();
        assignments.sort_by_key(|assignment| assignment.due_date);
        assignments
    }

    /// Open assignments due before today.
    pub fn overdue(&self) -> Vec<&Assignment> {
        let today: NaiveDate = self.clock.today();
        self.assignments()
            .iter()
            .filter(|assignment| assignment.is_overdue(today))
            .collect()
    }
}
