//! Durable key-value storage used by every planner store.
//!
//! Values are opaque strings (JSON in practice). Reading a key that was never
//! written is not an error and yields `Ok(None)`. Backends take `&self` so one
//! instance can be shared by every store in a single-threaded session.

use thiserror::Error;

mod memory;
mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

/// Storage keys, matching the browser planner's local storage layout.
pub mod keys {
    pub const EVENTS: &str = "events";
    pub const TODOS: &str = "todos";
    pub const NOTES: &str = "notes";
    pub const ASSIGNMENTS: &str = "assignments";
    pub const TIMER_SETTINGS: &str = "timerSettings";
}

/// Failures reported by a storage backend.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to read '{key}': {message}")]
    Read { key: String, message: String },

    #[error("Failed to write '{key}': {message}")]
    Write { key: String, message: String },

    #[error("Storage quota exceeded writing '{key}' ({needed} bytes, {limit} allowed)")]
    QuotaExceeded {
        key: String,
        needed: usize,
        limit: usize,
    },
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStorage {
    /// Fetch the value stored under `key`, or `None` if it was never written.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}
