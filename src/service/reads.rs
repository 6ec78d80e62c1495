//! Read Path
//!
//! Cache-aside reads: consult the cache, fall through to the backing store
//! on miss, populate on success. A store failure propagates and caches
//! nothing, so a failing read is retried on the very next request.
//!
//! There is deliberately no per-key request coalescing: concurrent misses on
//! the same key each query the store and each overwrite the entry (last
//! writer wins). Under burst cold-cache load that is a cache stampede;
//! accepted for the tiny key space here.

use tracing::debug;

use crate::cache::{deck_key, ALL_DECKS_KEY};
use crate::error::StoreError;
use crate::models::{Card, Deck};
use crate::service::DeckService;

impl DeckService {
    // == List Decks ==
    /// Returns all decks, serving from cache when a live entry exists.
    pub async fn list_decks(&self) -> Result<Vec<Deck>, StoreError> {
        if let Some(decks) = self.cache_get::<Vec<Deck>>(ALL_DECKS_KEY).await {
            debug!(key = ALL_DECKS_KEY, "cache hit");
            return Ok(decks);
        }

        debug!(key = ALL_DECKS_KEY, "cache miss, querying store");
        let decks = self.store.list_decks().await?;
        self.cache_put(ALL_DECKS_KEY, &decks).await;
        Ok(decks)
    }

    // == List Cards ==
    /// Returns a deck's cards, serving from cache when a live entry exists.
    pub async fn list_cards(&self, deck_id: i64) -> Result<Vec<Card>, StoreError> {
        let key = deck_key(deck_id);
        if let Some(cards) = self.cache_get::<Vec<Card>>(&key).await {
            debug!(key = %key, "cache hit");
            return Ok(cards);
        }

        debug!(key = %key, "cache miss, querying store");
        let cards = self.store.list_cards(deck_id).await?;
        self.cache_put(&key, &cards).await;
        Ok(cards)
    }
}
