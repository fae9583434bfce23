//! Unique record ids.

use std::cell::Cell;
use std::rc::Rc;

use super::clock::Clock;

pub trait IdGenerator {
    /// Return an id never handed out before in this process.
    fn next_id(&self) -> String;
}

/// Millisecond-timestamp ids, bumped past the previous id when two
/// records are created within the same millisecond.
pub struct TimestampIdGenerator {
    clock: Rc<dyn Clock>,
    last: Cell<i64>,
}

impl TimestampIdGenerator {
    pub fn new(clock: Rc<dyn Clock>) -> Self {
        Self {
            clock,
            last: Cell::new(i64::MIN),
        }
    }
}

impl IdGenerator for TimestampIdGenerator {
    fn next_id(&self) -> String {
        let millis = self.clock.now().timestamp_millis();
        let next = millis.max(self.last.get().saturating_add(1));
        self.last.set(next);
        next.to_string()
    }
}

/// Sequential ids starting at 1, handy for deterministic tests.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: Cell<u64>,
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        let id = self.next.get() + 1;
        self.next.set(id);
        id.to_string()
    }
}
