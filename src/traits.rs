use std::error::Error;

use async_trait::async_trait;

/// An asynchronous key-value store with string keys and string values.
///
/// This is the seam the [`EventStore`](crate::EventStore) persists through:
/// implementations may keep their entries in memory (see [`MemoryStore`](crate::MemoryStore)),
/// in a local file (see [`FileStore`](crate::FileStore)), or anywhere else.
/// Both operations may fail with a storage error; the `EventStore` treats every failure
/// the same way (log it, then serve the compiled-in dataset).
///
/// Implementations take `&self` and handle their own interior mutability, since one
/// store is typically shared by every caller in the process.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` if this key has never been set
    async fn get(&self, key: &str) -> Result<Option<String>, Box<dyn Error>>;

    /// Stores `value` under `key`, overwriting any previous value wholesale
    async fn set(&self, key: &str, value: String) -> Result<(), Box<dyn Error>>;
}
