//! Data models for the deck server
//!
//! Row types mirrored from the backing store plus the DTOs used for HTTP
//! request and response bodies.

pub mod requests;
pub mod responses;

use serde::{Deserialize, Serialize};

// == Deck ==
/// A deck of communication cards.
///
/// Owned by the backing store; the cache only mirrors query results and
/// never originates or mutates rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub id: i64,
    pub name: String,
}

// == Card ==
/// A single card belonging to a deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: i64,
    pub deck_id: i64,
    pub text: String,
    pub image_url: String,
}

// Re-export commonly used types
pub use requests::CardPayload;
pub use responses::{
    CardResponse, ErrorResponse, FlushResponse, HealthResponse, MutationResponse, StatsResponse,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_round_trips_through_json() {
        let deck = Deck { id: 5, name: "Greetings".to_string() };
        let json = serde_json::to_value(&deck).unwrap();
        assert_eq!(json["id"], 5);
        assert_eq!(serde_json::from_value::<Deck>(json).unwrap(), deck);
    }

    #[test]
    fn test_card_serializes_all_fields() {
        let card = Card {
            id: 1,
            deck_id: 5,
            text: "hello".to_string(),
            image_url: "/img/hello.png".to_string(),
        };
        let json = serde_json::to_string(&card).unwrap();
        assert!(json.contains("deck_id"));
        assert!(json.contains("image_url"));
    }
}
