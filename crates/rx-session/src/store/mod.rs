pub(crate) mod error;
pub(crate) mod file_store;
pub(crate) mod memory_store;
pub(crate) mod stored_entry;
pub(crate) mod token_store;

pub use error::{Result as StoreResult, StoreError};
pub use file_store::FileStore;
pub use memory_store::MemoryStore;
pub use token_store::TokenStore;

/// Durable string key-value storage shared by every session of a process.
///
/// Each call is a single atomic read or write. Removing a key that does not
/// exist succeeds.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    fn remove(&self, key: &str) -> StoreResult<()>;

    /// Remove `key` only while it still holds `expected`. Returns whether it was removed.
    fn remove_if(&self, key: &str, expected: &str) -> StoreResult<bool> {
        match self.get(key)? {
            Some(current) if current == expected => {
                self.remove(key)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
