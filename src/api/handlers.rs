//! API Handlers
//!
//! HTTP request handlers for each deck server endpoint. Handlers are thin:
//! they validate the request shape and delegate to [`DeckService`], which
//! owns the cache-aside and invalidation logic.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{
    Card, CardPayload, CardResponse, Deck, FlushResponse, HealthResponse, MutationResponse,
    StatsResponse,
};
use crate::service::DeckService;
use crate::store::DeckStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The cache-aside service, created at server start
    pub service: Arc<DeckService>,
}

impl AppState {
    /// Creates a new AppState around an existing service.
    pub fn new(service: DeckService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Creates a new AppState from configuration and a backing store.
    pub fn from_config(config: &Config, store: Arc<dyn DeckStore>) -> Self {
        Self::new(DeckService::new(store, config.ttl()))
    }
}

/// Handler for GET /api/decks
///
/// Returns all decks, cache-aside.
pub async fn list_decks_handler(State(state): State<AppState>) -> Result<Json<Vec<Deck>>> {
    let decks = state.service.list_decks().await?;
    Ok(Json(decks))
}

/// Handler for GET /api/decks/:deck_id/cards
///
/// Returns one deck's cards, cache-aside.
pub async fn list_cards_handler(
    State(state): State<AppState>,
    Path(deck_id): Path<i64>,
) -> Result<Json<Vec<Card>>> {
    let cards = state.service.list_cards(deck_id).await?;
    Ok(Json(cards))
}

/// Handler for POST /api/decks/:deck_id/cards
///
/// Creates a card, invalidating the deck's cached card list.
pub async fn add_card_handler(
    State(state): State<AppState>,
    Path(deck_id): Path<i64>,
    Json(payload): Json<CardPayload>,
) -> Result<(StatusCode, Json<CardResponse>)> {
    if let Some(error_msg) = payload.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    let card = state
        .service
        .add_card(deck_id, &payload.text, &payload.image_url)
        .await?;
    Ok((StatusCode::CREATED, Json(CardResponse::created(card))))
}

/// Handler for PUT /api/decks/:deck_id/cards/:card_id
///
/// Updates a card, invalidating the deck's cached card list.
pub async fn update_card_handler(
    State(state): State<AppState>,
    Path((deck_id, card_id)): Path<(i64, i64)>,
    Json(payload): Json<CardPayload>,
) -> Result<Json<MutationResponse>> {
    if let Some(error_msg) = payload.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    state
        .service
        .update_card(deck_id, card_id, &payload.text, &payload.image_url)
        .await?;
    Ok(Json(MutationResponse::new("updated", deck_id, card_id)))
}

/// Handler for DELETE /api/decks/:deck_id/cards/:card_id
///
/// Deletes a card, invalidating the deck's cached card list.
pub async fn delete_card_handler(
    State(state): State<AppState>,
    Path((deck_id, card_id)): Path<(i64, i64)>,
) -> Result<Json<MutationResponse>> {
    state.service.delete_card(deck_id, card_id).await?;
    Ok(Json(MutationResponse::new("deleted", deck_id, card_id)))
}

/// Handler for POST /api/cache/flush
///
/// Unconditionally clears the whole cache.
pub async fn flush_cache_handler(State(state): State<AppState>) -> Json<FlushResponse> {
    let flushed = state.service.flush_cache().await;
    Json(FlushResponse::new(flushed))
}

/// Handler for GET /api/cache/stats
///
/// Returns current cache hit/miss statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.service.cache_stats().await;
    Json(StatsResponse::new(&stats))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
