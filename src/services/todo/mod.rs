//! To-do list backed by the `todos` storage key.

use std::rc::Rc;

use crate::models::todo::Todo;
use crate::services::clock::Clock;
use crate::services::id::IdGenerator;
use crate::services::persistence::{Record, RecordList};
use crate::services::storage::{keys, KeyValueStorage};

impl Record for Todo {
    fn id(&self) -> &str {
        &self.id
    }
}

pub struct TodoList {
    todos: RecordList<Todo>,
    clock: Rc<dyn Clock>,
    ids: Rc<dyn IdGenerator>,
}

impl TodoList {
    pub fn load(
        storage: Rc<dyn KeyValueStorage>,
        clock: Rc<dyn Clock>,
        ids: Rc<dyn IdGenerator>,
    ) -> Self {
        Self {
            todos: RecordList::load(storage, keys::TODOS),
            clock,
            ids,
        }
    }

    pub fn todos(&self) -> &[Todo] {
        self.todos.records()
    }

    /// Add a todo. Blank text is ignored; returns the new id otherwise.
    pub fn add(&mut self, text: &str) -> Option<String> {
        let todo = Todo::new(self.ids.next_id(), text, self.clock.now())?;
        let id = todo.id.clone();
        self.todos.push(todo);
        Some(id)
    }

    /// Flip completion. Returns false if no todo has `id`.
    pub fn toggle(&mut self, id: &str) -> bool {
        self.todos.update(id, |todo| todo.completed = !todo.completed) > 0
    }

    pub fn delete(&mut self, id: &str) {
        self.todos.remove(id);
    }

    /// Newest first.
    pub fn sorted(&self) -> Vec<Todo> {
        let mut todos = self.todos.records().to_vec();
        todos.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        todos
    }

    pub fn remaining(&self) -> usize {
        self.todos().iter().filter(|todo| !todo.completed).count()
    }
}
