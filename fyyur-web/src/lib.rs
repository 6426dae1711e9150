//! Fyyur web library
//!
//! Router, page and API handlers for the Fyyur venue/artist booking
//! directory. The binary in `main.rs` wires settings, storage and logging
//! around [`build_router`].

use axum::Router;
use fyyur_common::CatalogRepository;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod error;
pub mod forms;
pub mod pages;
pub mod seed;
pub mod submissions;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Venue, artist and show storage
    pub catalog: CatalogRepository,
}

impl AppState {
    /// Create new application state
    pub fn new(catalog: CatalogRepository) -> Self {
        Self { catalog }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(pages::page_routes())
        .merge(api::api_routes())
        .merge(api::health_routes())
        .fallback(pages::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
