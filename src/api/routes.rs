//! API Routes
//!
//! Configures the Axum router with all deck server endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    add_card_handler, delete_card_handler, flush_cache_handler, health_handler,
    list_cards_handler, list_decks_handler, stats_handler, update_card_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/decks` - List all decks (cached)
/// - `GET /api/decks/:deck_id/cards` - List a deck's cards (cached)
/// - `POST /api/decks/:deck_id/cards` - Create a card (invalidates the deck)
/// - `PUT /api/decks/:deck_id/cards/:card_id` - Update a card (invalidates the deck)
/// - `DELETE /api/decks/:deck_id/cards/:card_id` - Delete a card (invalidates the deck)
/// - `POST /api/cache/flush` - Flush the whole cache
/// - `GET /api/cache/stats` - Cache hit/miss statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/api/decks", get(list_decks_handler))
        .route(
            "/api/decks/:deck_id/cards",
            get(list_cards_handler).post(add_card_handler),
        )
        .route(
            "/api/decks/:deck_id/cards/:card_id",
            put(update_card_handler).delete(delete_card_handler),
        )
        .route("/api/cache/flush", post(flush_cache_handler))
        .route("/api/cache/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
