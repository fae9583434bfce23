use std::cell::RefCell;
use std::collections::HashMap;

use super::{KeyValueStorage, StorageError, StorageResult};

/// In-process storage for tests and throwaway sessions.
///
/// An optional byte quota makes writes fail the way a full browser
/// storage area does.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RefCell<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject any write whose value is larger than `bytes`.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            values: RefCell::default(),
            quota: Some(bytes),
        }
    }

    /// Pre-populate a key, bypassing the quota.
    pub fn seeded(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        if let Some(limit) = self.quota {
            if value.len() > limit {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    needed: value.len(),
                    limit,
                });
            }
        }

        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
