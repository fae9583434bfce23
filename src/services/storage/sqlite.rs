use anyhow::Result;
use rusqlite::{params, OptionalExtension};

use super::{KeyValueStorage, StorageError, StorageResult};
use crate::services::database::Database;

/// Key-value storage persisted in the `kv_store` SQLite table.
pub struct SqliteStorage {
    db: Database,
}

impl SqliteStorage {
    /// Wrap an open database, creating the table if needed.
    pub fn new(db: Database) -> Result<Self> {
        db.initialize_schema()?;
        Ok(Self { db })
    }

    /// Open (or create) the database file at `path`.
    pub fn open(path: &str) -> Result<Self> {
        Self::new(Database::new(path)?)
    }

    pub fn in_memory() -> Result<Self> {
        Self::open(":memory:")
    }
}

impl KeyValueStorage for SqliteStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.db
            .connection()
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| StorageError::Read {
                key: key.to_string(),
                message: e.to_string(),
            })
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.db
            .connection()
            .execute(
                "INSERT INTO kv_store (key, value, updated_at)
                 VALUES (?1, ?2, CURRENT_TIMESTAMP)
                 ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at",
                params![key, value],
            )
            .map(|_| ())
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                message: e.to_string(),
            })
    }
}
