//! Backing Store Module
//!
//! The datastore seam behind the cache. The cache layer's only contract with
//! it is "execute a query, get rows or an error": no transaction semantics,
//! no cache awareness. A SQL-backed implementation would live here next to
//! the in-memory one.

mod memory;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{Card, Deck};

pub use memory::MemoryDeckStore;

// == Deck Store Trait ==
/// The backing datastore for decks and cards.
///
/// The cache layer treats every method as an opaque parameterized query:
/// reads return the canonical row set, mutations are durable once they
/// return `Ok`. Implementations must be safe to share across request tasks.
#[async_trait]
pub trait DeckStore: Send + Sync {
    /// Returns all decks.
    async fn list_decks(&self) -> Result<Vec<Deck>, StoreError>;

    /// Returns all cards belonging to a deck.
    async fn list_cards(&self, deck_id: i64) -> Result<Vec<Card>, StoreError>;

    /// Inserts a card into a deck, returning the stored row.
    async fn insert_card(
        &self,
        deck_id: i64,
        text: &str,
        image_url: &str,
    ) -> Result<Card, StoreError>;

    /// Updates an existing card's text and image.
    async fn update_card(
        &self,
        deck_id: i64,
        card_id: i64,
        text: &str,
        image_url: &str,
    ) -> Result<(), StoreError>;

    /// Deletes a card from a deck.
    async fn delete_card(&self, deck_id: i64, card_id: i64) -> Result<(), StoreError>;
}
