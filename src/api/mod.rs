//! API Module
//!
//! HTTP handlers and routing for the deck server REST API.
//!
//! # Endpoints
//! - `GET /api/decks` - List all decks
//! - `GET /api/decks/:deck_id/cards` - List a deck's cards
//! - `POST /api/decks/:deck_id/cards` - Create a card
//! - `PUT /api/decks/:deck_id/cards/:card_id` - Update a card
//! - `DELETE /api/decks/:deck_id/cards/:card_id` - Delete a card
//! - `POST /api/cache/flush` - Flush the cache
//! - `GET /api/cache/stats` - Cache statistics
//! - `GET /health` - Health check

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
