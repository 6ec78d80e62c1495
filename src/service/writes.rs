//! Write Path
//!
//! Card mutations go to the backing store first; on success, the write
//! invalidates exactly the mutated deck's card-list key. `"allDecks"` is
//! never touched: card mutations do not affect deck metadata.
//!
//! Known race window: between the store write completing and the delete
//! executing, a concurrent read can repopulate the key with pre-write rows,
//! and that stale entry survives until the next TTL expiry, write, or flush.
//! Bounded staleness is accepted in exchange for write availability.

use tracing::{debug, warn};

use crate::cache::deck_key;
use crate::error::StoreError;
use crate::models::Card;
use crate::service::DeckService;

impl DeckService {
    // == Add Card ==
    /// Inserts a card into a deck, then invalidates that deck's card list.
    pub async fn add_card(
        &self,
        deck_id: i64,
        text: &str,
        image_url: &str,
    ) -> Result<Card, StoreError> {
        let card = self.store.insert_card(deck_id, text, image_url).await?;
        self.invalidate_deck(deck_id).await;
        Ok(card)
    }

    // == Update Card ==
    /// Updates a card's text and image, then invalidates the deck's card list.
    pub async fn update_card(
        &self,
        deck_id: i64,
        card_id: i64,
        text: &str,
        image_url: &str,
    ) -> Result<(), StoreError> {
        self.store
            .update_card(deck_id, card_id, text, image_url)
            .await?;
        self.invalidate_deck(deck_id).await;
        Ok(())
    }

    // == Delete Card ==
    /// Deletes a card from a deck, then invalidates the deck's card list.
    pub async fn delete_card(&self, deck_id: i64, card_id: i64) -> Result<(), StoreError> {
        self.store.delete_card(deck_id, card_id).await?;
        self.invalidate_deck(deck_id).await;
        Ok(())
    }

    // == Invalidation ==
    /// Best-effort removal of a deck's card-list entry.
    ///
    /// The store write has already succeeded by the time this runs, so an
    /// invalidation failure is logged and swallowed rather than failing the
    /// write; the stale entry resolves at the next TTL expiry or write.
    async fn invalidate_deck(&self, deck_id: i64) {
        let key = deck_key(deck_id);
        match self.cache.write().await.delete(&key) {
            Ok(removed) => debug!(key = %key, removed, "invalidated deck card list"),
            Err(err) => warn!(key = %key, %err, "cache invalidation failed, entry may serve stale rows"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use crate::error::StoreError;
    use crate::service::DeckService;
    use crate::store::MemoryDeckStore;

    const TTL: Duration = Duration::from_secs(300);

    fn service_with_store() -> (Arc<MemoryDeckStore>, DeckService) {
        let store = Arc::new(MemoryDeckStore::seeded());
        store.add_deck(5, "Weather");
        let service = DeckService::new(store.clone(), TTL);
        (store, service)
    }

    #[tokio::test]
    async fn test_add_card_invalidates_deck_and_next_read_sees_it() {
        let (store, service) = service_with_store();

        // Warm the deck-5 entry
        assert!(service.list_cards(5).await.unwrap().is_empty());
        assert_eq!(store.read_query_count(), 1);

        let card = service.add_card(5, "Sunny", "/images/sunny.png").await.unwrap();

        // The next read misses the cache and reflects the new card
        let cards = service.list_cards(5).await.unwrap();
        assert_eq!(store.read_query_count(), 2);
        assert_eq!(cards, vec![card]);
    }

    #[tokio::test]
    async fn test_card_write_leaves_deck_list_key_untouched() {
        let (store, service) = service_with_store();

        // Warm both "allDecks" and "deck_5"
        service.list_decks().await.unwrap();
        service.list_cards(5).await.unwrap();
        assert_eq!(store.read_query_count(), 2);

        service.add_card(5, "Rain", "").await.unwrap();

        // Deck list still served from cache; only deck_5 was invalidated
        service.list_decks().await.unwrap();
        assert_eq!(store.read_query_count(), 2);
        assert_eq!(service.cache_stats().await.total_entries, 1);
    }

    #[tokio::test]
    async fn test_update_card_invalidates_deck() {
        let (store, service) = service_with_store();

        service.list_cards(1).await.unwrap();
        service.update_card(1, 1, "Hi there", "/images/hi.png").await.unwrap();

        let cards = service.list_cards(1).await.unwrap();
        assert_eq!(store.read_query_count(), 2);
        let updated = cards.iter().find(|c| c.id == 1).unwrap();
        assert_eq!(updated.text, "Hi there");
    }

    #[tokio::test]
    async fn test_delete_card_invalidates_deck() {
        let (store, service) = service_with_store();

        service.list_cards(1).await.unwrap();
        service.delete_card(1, 2).await.unwrap();

        let cards = service.list_cards(1).await.unwrap();
        assert!(cards.iter().all(|c| c.id != 2));
    }

    #[tokio::test]
    async fn test_failed_write_does_not_invalidate() {
        let (store, service) = service_with_store();

        service.list_cards(1).await.unwrap();

        let result = service.update_card(1, 99, "x", "").await;
        assert!(matches!(result, Err(StoreError::CardNotFound { .. })));

        // The cached entry survived the failed write
        service.list_cards(1).await.unwrap();
        assert_eq!(store.read_query_count(), 1);
    }

    #[tokio::test]
    async fn test_write_to_cold_deck_succeeds() {
        let (_, service) = service_with_store();

        // No cached entry to invalidate: delete is idempotent, write succeeds
        let card = service.add_card(5, "Cloudy", "").await.unwrap();
        assert_eq!(card.deck_id, 5);
    }
}
