//! Cache Statistics Module
//!
//! Tracks hit/miss counters for the read cache.

use serde::Serialize;

// == Cache Stats ==
/// Hit/miss counters for the read cache.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of live-entry lookups
    pub hits: u64,
    /// Number of lookups that found nothing (never set, expired, or deleted)
    pub misses: u64,
    /// Entries currently stored, live or not
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if no lookups have happened.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Set Total Entries ==
    /// Updates the stored-entry count.
    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
