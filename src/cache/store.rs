//! Cache Store Module
//!
//! In-memory key/value store with passive TTL expiry. This is the read-side
//! accelerator: callers consult it before the backing store and populate it on
//! miss, so correctness must hold even if every lookup missed.

use std::collections::HashMap;
use std::time::Duration;

use serde_json::Value;

use crate::cache::{CacheEntry, CacheStats};
use crate::error::CacheError;

// == Cache Store ==
/// In-memory map from cache key to entry, with lazy TTL expiry.
///
/// Expiry is passive: staleness is computed from elapsed wall-clock time at
/// lookup, not by a background sweep. A stale entry persists physically until
/// the next `get` on its key, an overwrite, or a flush — acceptable because
/// the key space is small and bounded by deck count.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Hit/miss counters
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty CacheStore.
    pub fn new() -> Self {
        Self::default()
    }

    // == Get ==
    /// Retrieves the live value for a key.
    ///
    /// Returns `None` if the key was never set, was deleted, or has expired.
    /// An expired entry found here is removed. A miss is a normal control-flow
    /// branch, not an error.
    pub fn get(&mut self, key: &str) -> Option<Value> {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                self.entries.remove(key);
                self.stats.set_total_entries(self.entries.len());
                self.stats.record_miss();
                None
            }
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Set ==
    /// Stores a value under a key, overwriting unconditionally.
    ///
    /// The insertion time is reset, so an overwrite restarts the TTL window.
    pub fn set(&mut self, key: String, value: Value, ttl: Duration) {
        self.entries.insert(key, CacheEntry::new(value, ttl));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Delete ==
    /// Removes an entry by key. Idempotent: deleting an absent key is `Ok`.
    ///
    /// Returns whether an entry was actually removed. The `Result` is part of
    /// the invalidation seam: an in-memory delete cannot fail, but a networked
    /// cache backend could, and callers treat that as best-effort.
    pub fn delete(&mut self, key: &str) -> Result<bool, CacheError> {
        let removed = self.entries.remove(key).is_some();
        self.stats.set_total_entries(self.entries.len());
        Ok(removed)
    }

    // == Flush All ==
    /// Clears every entry regardless of TTL.
    pub fn flush_all(&mut self) {
        self.entries.clear();
        self.stats.set_total_entries(0);
    }

    // == Stats ==
    /// Returns current hit/miss statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the number of physically stored entries, live or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if no entries are stored.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
