//! Deck Service Module
//!
//! The layer between the HTTP handlers and the backing store. Reads go
//! cache-aside through the shared [`CacheStore`]; writes go to the backing
//! store first and then invalidate exactly the cache key they affect.
//!
//! The cache is never the source of truth: every operation here would stay
//! correct if the cache were removed entirely.

mod reads;
mod writes;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::cache::{CacheStats, CacheStore};
use crate::store::DeckStore;

// == Deck Service ==
/// Cache-aside read/write paths over a shared cache and a backing store.
///
/// Created once at server start and shared across request tasks. The TTL is
/// fixed for the process lifetime; changing it requires a restart.
pub struct DeckService {
    /// Shared read cache; coarse lock, key space bounded by deck count.
    /// No caller holds the lock across a backing-store query.
    cache: Arc<RwLock<CacheStore>>,
    /// The backing datastore
    store: Arc<dyn DeckStore>,
    /// TTL applied to every populated entry
    ttl: Duration,
}

impl DeckService {
    // == Constructor ==
    /// Creates a service over the given store with a fixed entry TTL.
    pub fn new(store: Arc<dyn DeckStore>, ttl: Duration) -> Self {
        Self {
            cache: Arc::new(RwLock::new(CacheStore::new())),
            store,
            ttl,
        }
    }

    // == Admin: Flush ==
    /// Unconditionally clears the whole cache.
    ///
    /// Operational escape hatch (e.g. after out-of-band data repair); every
    /// subsequent read is a cache miss. Returns the number of entries removed.
    pub async fn flush_cache(&self) -> usize {
        let mut cache = self.cache.write().await;
        let flushed = cache.len();
        cache.flush_all();
        info!(flushed, "cache flushed");
        flushed
    }

    // == Admin: Stats ==
    /// Returns a snapshot of the cache hit/miss counters.
    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.read().await.stats()
    }

    // == Cache Helpers ==
    /// Looks up and decodes a live cache entry, or `None` on miss.
    ///
    /// An entry that no longer decodes to the expected row type is discarded
    /// and treated as a miss.
    async fn cache_get<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.cache.write().await.get(key)?;
        match serde_json::from_value(value) {
            Ok(rows) => Some(rows),
            Err(err) => {
                debug!(key = %key, %err, "discarding undecodable cache entry");
                None
            }
        }
    }

    /// Serializes rows into the cache under `key` with the configured TTL.
    ///
    /// A serialization failure only skips the populate; the read that already
    /// has its rows still succeeds.
    async fn cache_put<T: serde::Serialize>(&self, key: &str, rows: &T) {
        match serde_json::to_value(rows) {
            Ok(value) => {
                self.cache
                    .write()
                    .await
                    .set(key.to_string(), value, self.ttl);
                debug!(key = %key, "cache populated");
            }
            Err(err) => debug!(key = %key, %err, "failed to serialize rows for cache"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryDeckStore;

    #[tokio::test]
    async fn test_flush_cache_clears_all_keys() {
        let store = Arc::new(MemoryDeckStore::seeded());
        let service = DeckService::new(store, Duration::from_secs(300));

        // Populate "allDecks" and "deck_1"
        service.list_decks().await.unwrap();
        service.list_cards(1).await.unwrap();
        assert_eq!(service.cache_stats().await.total_entries, 2);

        let flushed = service.flush_cache().await;
        assert_eq!(flushed, 2);
        assert_eq!(service.cache_stats().await.total_entries, 0);
    }

    #[tokio::test]
    async fn test_flush_empty_cache_is_noop() {
        let store = Arc::new(MemoryDeckStore::seeded());
        let service = DeckService::new(store, Duration::from_secs(300));

        assert_eq!(service.flush_cache().await, 0);
    }

    #[tokio::test]
    async fn test_reads_after_flush_miss_cache() {
        let store = Arc::new(MemoryDeckStore::seeded());
        let service = DeckService::new(store.clone(), Duration::from_secs(300));

        service.list_decks().await.unwrap();
        service.flush_cache().await;
        service.list_decks().await.unwrap();

        // One store query before the flush, one after
        assert_eq!(store.read_query_count(), 2);
    }
}
