//! Deckboard - a card deck API server with a read-side TTL cache
//!
//! Serves deck and card lists for a communication-board app out of a
//! cache-aside layer, invalidating exactly the affected key on card writes.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;

pub use api::AppState;
pub use config::Config;
pub use service::DeckService;
