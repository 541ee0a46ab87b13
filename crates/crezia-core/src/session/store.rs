//! Durable key-value store trait.

use crate::error::Result;

/// A string key-value store that outlives the process.
///
/// Writes are last-writer-wins; no transactional guarantee is required
/// because only one logical session mutates the store.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing a missing key is not an error.
    fn delete(&self, key: &str) -> Result<()>;
}
