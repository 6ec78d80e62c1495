//! Error types for the deck server
//!
//! Provides unified error handling using thiserror. The taxonomy is small:
//! a backing-store failure surfaces to the caller, a cache invalidation
//! failure is logged and swallowed by the write path, and a cache miss is
//! not an error at all.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Cache Error Enum ==
/// Failure from the cache backend itself.
///
/// The in-memory store never produces one; the variant exists so the
/// invalidation seam stays honest if the cache is later backed by a
/// networked store.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The cache backend rejected or failed the operation
    #[error("cache backend error: {0}")]
    Backend(String),
}

// == Store Error Enum ==
/// Failure from the backing datastore.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store could not execute the query
    #[error("backing store unavailable: {0}")]
    Unavailable(String),

    /// The referenced deck does not exist
    #[error("deck {0} not found")]
    DeckNotFound(i64),

    /// The referenced card does not exist in the given deck
    #[error("card {card_id} not found in deck {deck_id}")]
    CardNotFound { deck_id: i64, card_id: i64 },
}

// == Api Error Enum ==
/// Unified error type returned by the HTTP handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Backing store failure, propagated from the read or write path
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Invalid request data
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Store(StoreError::Unavailable(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Store(StoreError::DeckNotFound(_))
            | ApiError::Store(StoreError::CardNotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the HTTP layer.
pub type Result<T> = std::result::Result<T, ApiError>;
