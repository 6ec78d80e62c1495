//! In-Memory Deck Store
//!
//! A `DeckStore` backed by process memory. Serves as the development backend
//! and as the test fixture: it counts read queries, can simulate query
//! latency, and can be flipped to an unavailable state to exercise the
//! store-failure path.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{Card, Deck};
use crate::store::DeckStore;

#[derive(Debug)]
struct Inner {
    decks: Vec<Deck>,
    cards: HashMap<i64, Vec<Card>>,
    next_card_id: i64,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            decks: Vec::new(),
            cards: HashMap::new(),
            next_card_id: 1,
        }
    }
}

// == Memory Deck Store ==
/// In-memory `DeckStore` implementation.
#[derive(Debug, Default)]
pub struct MemoryDeckStore {
    inner: Mutex<Inner>,
    /// Read queries executed so far (cache-aside tests count these)
    read_queries: AtomicU64,
    /// When true, every query fails with `StoreError::Unavailable`
    unavailable: AtomicBool,
    /// Artificial latency applied to read queries
    read_latency: Duration,
}

impl MemoryDeckStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store whose read queries take at least `latency`.
    ///
    /// Useful for widening the cold-cache race window in stampede tests.
    pub fn with_read_latency(latency: Duration) -> Self {
        Self {
            read_latency: latency,
            ..Self::default()
        }
    }

    /// Creates a store seeded with a few communication-board decks.
    pub fn seeded() -> Self {
        let mut cards = HashMap::new();
        cards.insert(
            1,
            vec![
                Card {
                    id: 1,
                    deck_id: 1,
                    text: "Hello".to_string(),
                    image_url: "/images/hello.png".to_string(),
                },
                Card {
                    id: 2,
                    deck_id: 1,
                    text: "Goodbye".to_string(),
                    image_url: "/images/goodbye.png".to_string(),
                },
            ],
        );
        cards.insert(
            2,
            vec![Card {
                id: 3,
                deck_id: 2,
                text: "Water".to_string(),
                image_url: "/images/water.png".to_string(),
            }],
        );
        cards.insert(3, Vec::new());

        let inner = Inner {
            decks: vec![
                Deck { id: 1, name: "Greetings".to_string() },
                Deck { id: 2, name: "Food".to_string() },
                Deck { id: 3, name: "Feelings".to_string() },
            ],
            cards,
            next_card_id: 4,
        };

        Self {
            inner: Mutex::new(inner),
            ..Self::default()
        }
    }

    /// Adds a deck row. Fixture helper for tests that need extra decks.
    pub fn add_deck(&self, id: i64, name: &str) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.decks.push(Deck { id, name: name.to_string() });
            inner.cards.entry(id).or_default();
        }
    }

    // == Instrumentation ==
    /// Number of read queries executed so far.
    pub fn read_query_count(&self) -> u64 {
        self.read_queries.load(Ordering::SeqCst)
    }

    /// Simulates an outage: while set, every query fails.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    // == Internals ==
    fn lock(&self) -> Result<MutexGuard<'_, Inner>, StoreError> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))
    }

    async fn begin_read(&self) -> Result<(), StoreError> {
        self.check_available()?;
        self.read_queries.fetch_add(1, Ordering::SeqCst);
        if !self.read_latency.is_zero() {
            tokio::time::sleep(self.read_latency).await;
        }
        Ok(())
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("simulated outage".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl DeckStore for MemoryDeckStore {
    async fn list_decks(&self) -> Result<Vec<Deck>, StoreError> {
        self.begin_read().await?;
        Ok(self.lock()?.decks.clone())
    }

    async fn list_cards(&self, deck_id: i64) -> Result<Vec<Card>, StoreError> {
        self.begin_read().await?;
        let inner = self.lock()?;
        if !inner.decks.iter().any(|d| d.id == deck_id) {
            return Err(StoreError::DeckNotFound(deck_id));
        }
        Ok(inner.cards.get(&deck_id).cloned().unwrap_or_default())
    }

    async fn insert_card(
        &self,
        deck_id: i64,
        text: &str,
        image_url: &str,
    ) -> Result<Card, StoreError> {
        self.check_available()?;
        let mut inner = self.lock()?;
        if !inner.decks.iter().any(|d| d.id == deck_id) {
            return Err(StoreError::DeckNotFound(deck_id));
        }

        let card = Card {
            id: inner.next_card_id,
            deck_id,
            text: text.to_string(),
            image_url: image_url.to_string(),
        };
        inner.next_card_id += 1;
        inner.cards.entry(deck_id).or_default().push(card.clone());
        Ok(card)
    }

    async fn update_card(
        &self,
        deck_id: i64,
        card_id: i64,
        text: &str,
        image_url: &str,
    ) -> Result<(), StoreError> {
        self.check_available()?;
        let mut inner = self.lock()?;
        let card = inner
            .cards
            .get_mut(&deck_id)
            .and_then(|cards| cards.iter_mut().find(|c| c.id == card_id))
            .ok_or(StoreError::CardNotFound { deck_id, card_id })?;

        card.text = text.to_string();
        card.image_url = image_url.to_string();
        Ok(())
    }

    async fn delete_card(&self, deck_id: i64, card_id: i64) -> Result<(), StoreError> {
        self.check_available()?;
        let mut inner = self.lock()?;
        let cards = inner
            .cards
            .get_mut(&deck_id)
            .ok_or(StoreError::CardNotFound { deck_id, card_id })?;

        let before = cards.len();
        cards.retain(|c| c.id != card_id);
        if cards.len() == before {
            return Err(StoreError::CardNotFound { deck_id, card_id });
        }
        Ok(())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_store_lists_decks() {
        let store = MemoryDeckStore::seeded();
        let decks = store.list_decks().await.unwrap();
        assert_eq!(decks.len(), 3);
        assert_eq!(decks[0].name, "Greetings");
    }

    #[tokio::test]
    async fn test_list_cards_unknown_deck() {
        let store = MemoryDeckStore::seeded();
        let result = store.list_cards(99).await;
        assert!(matches!(result, Err(StoreError::DeckNotFound(99))));
    }

    #[tokio::test]
    async fn test_insert_card_assigns_sequential_ids() {
        let store = MemoryDeckStore::seeded();

        let first = store.insert_card(3, "Happy", "/images/happy.png").await.unwrap();
        let second = store.insert_card(3, "Sad", "/images/sad.png").await.unwrap();

        assert_eq!(second.id, first.id + 1);
        assert_eq!(store.list_cards(3).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_card_missing_card() {
        let store = MemoryDeckStore::seeded();
        let result = store.update_card(1, 99, "x", "").await;
        assert!(matches!(result, Err(StoreError::CardNotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_card_removes_row() {
        let store = MemoryDeckStore::seeded();

        store.delete_card(1, 1).await.unwrap();

        let cards = store.list_cards(1).await.unwrap();
        assert_eq!(cards.len(), 1);
        assert!(cards.iter().all(|c| c.id != 1));
    }

    #[tokio::test]
    async fn test_read_query_count_increments() {
        let store = MemoryDeckStore::seeded();
        assert_eq!(store.read_query_count(), 0);

        store.list_decks().await.unwrap();
        store.list_cards(1).await.unwrap();

        assert_eq!(store.read_query_count(), 2);
    }

    #[tokio::test]
    async fn test_unavailable_store_fails_queries() {
        let store = MemoryDeckStore::seeded();
        store.set_unavailable(true);

        assert!(matches!(
            store.list_decks().await,
            Err(StoreError::Unavailable(_))
        ));
        assert!(matches!(
            store.insert_card(1, "x", "").await,
            Err(StoreError::Unavailable(_))
        ));

        store.set_unavailable(false);
        assert!(store.list_decks().await.is_ok());
    }
}
