//! Key/value persistence for card preferences.
//!
//! The popup only ever needs string slots addressed by string keys, so the
//! storage medium is a small trait with two implementations:
//! - [`MemoryStore`]: process-local map, used by tests and `--ephemeral`
//! - [`RedbStore`]: ACID-compliant redb file that outlives the window
//!
//! Neither `get` nor `set` reports failure to the caller. A medium that
//! cannot be read behaves as if the slot were never written, and a failed
//! write is logged and dropped.

use crate::error::PopupResult;
use parking_lot::RwLock;
use redb::{Database, ReadableTable, TableDefinition};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Table holding every persisted slot (key: slot name, value: slot text)
const PREFS_TABLE: TableDefinition<&str, &str> = TableDefinition::new("prefs");

/// A string-keyed, string-valued storage medium.
pub trait KeyValueStore: Send + Sync {
    /// Read a slot, `None` if it has never been written.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a slot, overwriting any previous value.
    fn set(&self, key: &str, value: &str);
}

/// In-memory store. Values live as long as the store itself.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots written so far
    pub fn len(&self) -> usize {
        self.slots.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.read().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.slots.write().insert(key.to_string(), value.to_string());
    }
}

/// Durable store backed by a single redb table.
#[derive(Clone)]
pub struct RedbStore {
    db: Arc<RwLock<Database>>,
}

impl RedbStore {
    /// Open (or create) the preferences database at `path`.
    ///
    /// Creates the parent directory and the `prefs` table if needed.
    pub fn open(path: impl AsRef<Path>) -> PopupResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(PREFS_TABLE)?;
        }
        write_txn.commit()?;

        tracing::debug!(path = %path.display(), "opened preferences database");

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    /// Fallible read used by the [`KeyValueStore`] impl.
    pub fn try_get(&self, key: &str) -> PopupResult<Option<String>> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(PREFS_TABLE)?;

        match table.get(key)? {
            Some(v) => Ok(Some(v.value().to_string())),
            None => Ok(None),
        }
    }

    /// Fallible write used by the [`KeyValueStore`] impl.
    pub fn try_set(&self, key: &str, value: &str) -> PopupResult<()> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(PREFS_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

impl KeyValueStore for RedbStore {
    fn get(&self, key: &str) -> Option<String> {
        self.try_get(key).unwrap_or_else(|e| {
            tracing::warn!(key, error = %e, "preference read failed, using default");
            None
        })
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = self.try_set(key, value) {
            tracing::warn!(key, error = %e, "preference write dropped");
        }
    }
}
