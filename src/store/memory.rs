//! In-memory storage implementation

use super::error::StoreError;
use serde::Serialize;
use siphasher::sip::SipHasher13;
use std::collections::HashMap;
use std::hash::BuildHasherDefault;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Type alias for our hash map with SipHasher
type StoreMap = HashMap<String, String, BuildHasherDefault<SipHasher13>>;

/// Thread-safe in-memory key-value store
///
/// A single reader-writer lock guards the whole map. Read operations
/// (`get`, `exists`, `keys`, `size`, `stats`) take it in shared mode,
/// writes (`set`, `delete`, `clear`) take it exclusively. Every guard is
/// dropped before the method returns, so no lock outlives a call.
///
/// Waiting writers are not served in any guaranteed order; that is left
/// to the platform `RwLock`.
pub struct MemoryStore {
    /// The main storage map
    store: RwLock<StoreMap>,
}

impl MemoryStore {
    /// Create a new memory store with default capacity
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Create a new memory store with specified initial capacity
    pub fn with_capacity(capacity: usize) -> Self {
        MemoryStore {
            store: RwLock::new(HashMap::with_capacity_and_hasher(
                capacity,
                BuildHasherDefault::<SipHasher13>::default(),
            )),
        }
    }

    // A panic can only happen inside a single HashMap call, which never
    // leaves the map half-written, so a poisoned lock still guards valid data.
    fn read(&self) -> RwLockReadGuard<'_, StoreMap> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreMap> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Set a key-value pair, overwriting any previous value
    ///
    /// Fails with [`StoreError::InvalidKey`] for an empty key, before the
    /// lock is taken. Any value is accepted, including the empty string.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) -> Result<(), StoreError> {
        let key = key.into();
        if key.is_empty() {
            return Err(StoreError::InvalidKey);
        }

        let value = value.into();
        self.write().insert(key, value);
        Ok(())
    }

    /// Get a copy of the value stored under `key`
    pub fn get(&self, key: &str) -> Option<String> {
        self.read().get(key).cloned()
    }

    /// Delete a key, returns true if the key existed
    pub fn delete(&self, key: &str) -> bool {
        self.write().remove(key).is_some()
    }

    /// Check if a key exists
    pub fn exists(&self, key: &str) -> bool {
        self.read().contains_key(key)
    }

    /// Snapshot of all keys, in no particular order
    ///
    /// The returned vector is owned; later writes do not affect it.
    pub fn keys(&self) -> Vec<String> {
        self.read().keys().cloned().collect()
    }

    /// Remove all keys
    pub fn clear(&self) {
        self.write().clear();
    }

    /// Get the number of stored keys
    pub fn size(&self) -> usize {
        self.read().len()
    }

    /// Alias of [`MemoryStore::size`]
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Get statistics about the store
    ///
    /// Both figures come from the same shared acquisition.
    pub fn stats(&self) -> StoreStats {
        let store = self.read();
        let used_memory_bytes = store.iter().map(|(k, v)| k.len() + v.len()).sum();

        StoreStats {
            keys: store.len(),
            used_memory_bytes,
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics about the memory store
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub keys: usize,
    pub used_memory_bytes: usize,
}
