//! Loading and flushing record lists through key-value storage.
//!
//! Every planner store keeps its records as a JSON array under one key.
//! Decoding is a tagged step ([`StoredList`]) so callers match on the outcome
//! instead of re-checking payload shape. Nothing in here returns an error:
//! unreadable or malformed state degrades to an empty list and a failed
//! write leaves the in-memory records untouched.

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::storage::KeyValueStorage;

/// Outcome of decoding a stored list payload.
#[derive(Debug, Clone, PartialEq)]
pub enum StoredList<T> {
    /// The payload was a sequence. `dropped` counts elements that failed to
    /// decode and were skipped.
    Loaded { records: Vec<T>, dropped: usize },
    /// Nothing has been written under the key yet.
    Absent,
    /// The payload was unparseable or not a sequence.
    Invalid(String),
}

impl<T> StoredList<T> {
    pub fn into_records(self) -> Vec<T> {
        match self {
            StoredList::Loaded { records, .. } => records,
            StoredList::Absent | StoredList::Invalid(_) => Vec::new(),
        }
    }
}

/// Decode a raw stored value into records.
pub fn decode_list<T: DeserializeOwned>(raw: Option<&str>) -> StoredList<T> {
    let Some(raw) = raw else {
        return StoredList::Absent;
    };

    let items = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items,
        Ok(other) => return StoredList::Invalid(format!("expected a list, found {}", kind_of(&other))),
        Err(e) => return StoredList::Invalid(e.to_string()),
    };

    let total = items.len();
    let records: Vec<T> = items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                log::debug!("Skipping stored record: {}", e);
                None
            }
        })
        .collect();
    let dropped = total - records.len();

    StoredList::Loaded { records, dropped }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

/// Read and decode the list stored under `key`, logging any recovery.
pub fn load_list<T: DeserializeOwned>(storage: &dyn KeyValueStorage, key: &str) -> Vec<T> {
    let raw = match storage.get(key) {
        Ok(raw) => raw,
        Err(e) => {
            log::warn!("{}; starting with an empty list", e);
            None
        }
    };

    match decode_list(raw.as_deref()) {
        StoredList::Loaded { records, dropped } => {
            if dropped > 0 {
                log::warn!("Dropped {} malformed '{}' records while loading", dropped, key);
            }
            log::debug!("Loaded {} '{}' records", records.len(), key);
            records
        }
        StoredList::Absent => Vec::new(),
        StoredList::Invalid(reason) => {
            log::warn!("Stored '{}' is invalid ({}); resetting to an empty list", key, reason);
            Vec::new()
        }
    }
}

/// Serialize `value` and write it under `key`.
/// Returns `false` when the write failed; the failure is logged, not raised.
pub fn flush<T: Serialize + ?Sized>(storage: &dyn KeyValueStorage, key: &str, value: &T) -> bool {
    let data = match serde_json::to_string(value) {
        Ok(data) => data,
        Err(e) => {
            log::error!("Failed to serialize '{}': {}", key, e);
            return false;
        }
    };

    match storage.set(key, &data) {
        Ok(()) => true,
        Err(e) => {
            log::error!("Error saving '{}': {}", key, e);
            false
        }
    }
}

/// Read a single stored value, falling back to `fallback` when it is absent or unreadable.
pub fn load_value<T: DeserializeOwned>(storage: &dyn KeyValueStorage, key: &str, fallback: T) -> T {
    match storage.get(key) {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            log::warn!("Stored '{}' is invalid ({}); using defaults", key, e);
            fallback
        }),
        Ok(None) => fallback,
        Err(e) => {
            log::warn!("{}; using defaults", e);
            fallback
        }
    }
}

/// Records that can be addressed by an opaque string id.
pub trait Record {
    fn id(&self) -> &str;
}

/// An ordered record list mirrored to one storage key.
///
/// Every mutating method flushes the full list before returning.
pub struct RecordList<T> {
    key: &'static str,
    storage: Rc<dyn KeyValueStorage>,
    records: Vec<T>,
}

impl<T> RecordList<T>
where
    T: Record + Serialize + DeserializeOwned,
{
    /// Load the list stored under `key`.
    pub fn load(storage: Rc<dyn KeyValueStorage>, key: &'static str) -> Self {
        let records = load_list(storage.as_ref(), key);
        Self {
            key,
            storage,
            records,
        }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record and flush.
    pub fn push(&mut self, record: T) {
        self.records.push(record);
        self.flush();
    }

    /// Remove every record with `id`, flush, and return how many were removed.
    pub fn remove(&mut self, id: &str) -> usize {
        let before = self.records.len();
        self.records.retain(|record| record.id() != id);
        let removed = before - self.records.len();
        self.flush();
        removed
    }

    /// Apply `change` to every record with `id`, flush, and return how many matched.
    pub fn update(&mut self, id: &str, mut change: impl FnMut(&mut T)) -> usize {
        let mut matched = 0;
        for record in self.records.iter_mut().filter(|record| record.id() == id) {
            change(record);
            matched += 1;
        }
        self.flush();
        matched
    }

    /// Write the full list to storage. Returns `false` if the write failed.
    pub fn flush(&self) -> bool {
        flush(self.storage.as_ref(), self.key, &self.records)
    }
}
