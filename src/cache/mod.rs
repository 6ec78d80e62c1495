//! Cache Module
//!
//! In-memory read cache with passive TTL expiry and the deterministic key
//! scheme shared by the read and write paths.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Key Scheme ==
// Other components rely on these exact strings; changing them silently
// orphans every populated entry.

/// Cache key for the full deck list.
pub const ALL_DECKS_KEY: &str = "allDecks";

/// Cache key for a single deck's card list.
pub fn deck_key(deck_id: i64) -> String {
    format!("deck_{deck_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_key_format() {
        assert_eq!(deck_key(5), "deck_5");
        assert_eq!(deck_key(120), "deck_120");
    }

    #[test]
    fn test_keys_are_distinct_per_deck() {
        assert_ne!(deck_key(1), deck_key(2));
        assert_ne!(deck_key(1), ALL_DECKS_KEY);
    }
}
