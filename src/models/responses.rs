//! Response DTOs for the deck server API
//!
//! Defines the structure of outgoing HTTP response bodies. List reads return
//! the row types directly; mutations and admin operations use the wrappers
//! here.

use serde::Serialize;

use crate::models::Card;

/// Response body for card creation (POST /api/decks/:deck_id/cards)
#[derive(Debug, Clone, Serialize)]
pub struct CardResponse {
    /// Success message
    pub message: String,
    /// The created card as stored
    pub card: Card,
}

impl CardResponse {
    /// Creates a new CardResponse for a stored card
    pub fn created(card: Card) -> Self {
        Self {
            message: format!("Card {} created in deck {}", card.id, card.deck_id),
            card,
        }
    }
}

/// Response body for card update/delete operations
#[derive(Debug, Clone, Serialize)]
pub struct MutationResponse {
    /// Success message
    pub message: String,
    /// The affected deck
    pub deck_id: i64,
    /// The affected card
    pub card_id: i64,
}

impl MutationResponse {
    /// Creates a new MutationResponse
    pub fn new(action: &str, deck_id: i64, card_id: i64) -> Self {
        Self {
            message: format!("Card {card_id} in deck {deck_id} {action}"),
            deck_id,
            card_id,
        }
    }
}

/// Response body for the cache flush endpoint (POST /api/cache/flush)
#[derive(Debug, Clone, Serialize)]
pub struct FlushResponse {
    /// Success message
    pub message: String,
    /// Number of entries removed by the flush
    pub flushed_entries: usize,
}

impl FlushResponse {
    /// Creates a new FlushResponse
    pub fn new(flushed_entries: usize) -> Self {
        Self {
            message: "Cache flushed".to_string(),
            flushed_entries,
        }
    }
}

/// Response body for the cache stats endpoint (GET /api/cache/stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(stats: &crate::cache::CacheStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_card() -> Card {
        Card {
            id: 7,
            deck_id: 5,
            text: "hello".to_string(),
            image_url: String::new(),
        }
    }

    #[test]
    fn test_card_response_serialize() {
        let resp = CardResponse::created(sample_card());
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("created"));
        assert!(json.contains("\"id\":7"));
    }

    #[test]
    fn test_mutation_response_serialize() {
        let resp = MutationResponse::new("deleted", 5, 7);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("deleted"));
        assert!(json.contains("\"deck_id\":5"));
    }

    #[test]
    fn test_flush_response_serialize() {
        let resp = FlushResponse::new(3);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("flushed_entries"));
    }

    #[test]
    fn test_stats_response_hit_rate() {
        let mut stats = crate::cache::CacheStats::new();
        for _ in 0..8 {
            stats.record_hit();
        }
        for _ in 0..2 {
            stats.record_miss();
        }
        let resp = StatsResponse::new(&stats);
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("store unavailable");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
    }
}
