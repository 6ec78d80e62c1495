//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, Instant};

use serde_json::Value;

// == Cache Entry ==
/// A single cached payload with its insertion time and TTL.
///
/// An entry is "live" only while `now - inserted_at < ttl`. Once that window
/// closes the entry is logically absent even if it is still physically stored;
/// [`CacheStore::get`](crate::cache::CacheStore::get) removes it on the next lookup.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The cached payload (a serialized query result)
    pub value: Value,
    /// When the entry was inserted
    pub inserted_at: Instant,
    /// How long the entry stays live after insertion
    pub ttl: Duration,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry inserted now.
    pub fn new(value: Value, ttl: Duration) -> Self {
        Self {
            value,
            inserted_at: Instant::now(),
            ttl,
        }
    }

    // == Is Expired ==
    /// Checks whether the entry's TTL has elapsed.
    ///
    /// Boundary condition: an entry is expired once the elapsed time is
    /// greater than or equal to the TTL, so a zero TTL entry is expired
    /// immediately.
    pub fn is_expired(&self) -> bool {
        self.inserted_at.elapsed() >= self.ttl
    }

    // == Time To Live ==
    /// Returns the remaining live time, or zero if already expired.
    pub fn ttl_remaining(&self) -> Duration {
        self.ttl.saturating_sub(self.inserted_at.elapsed())
    }
}
