use crate::store::{KeyValueStore, StoreResult};

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// In-process store for tests and hosts that should not persist anything
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    // A panic while holding the lock cannot leave a half-written String
    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.entries().remove(key);
        Ok(())
    }

    fn remove_if(&self, key: &str, expected: &str) -> StoreResult<bool> {
        let mut entries = self.entries();
        if entries.get(key).is_some_and(|current| current == expected) {
            entries.remove(key);
            return Ok(true);
        }
        Ok(false)
    }
}
