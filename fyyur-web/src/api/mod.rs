//! JSON API handlers
//!
//! Read-only mirror of the listing pages. Every response body is the
//! serialized listing record the matching HTML page renders from.

use axum::{routing::get, Router};

use crate::AppState;

pub mod artists;
pub mod health;
pub mod shows;
pub mod venues;

pub use health::health_routes;

/// Build the `/api` routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/venues", get(venues::list_venues))
        .route("/api/venues/search", get(venues::search_venues))
        .route("/api/venues/:venue_id", get(venues::get_venue))
        .route("/api/artists", get(artists::list_artists))
        .route("/api/artists/search", get(artists::search_artists))
        .route("/api/artists/:artist_id", get(artists::get_artist))
        .route("/api/shows", get(shows::list_shows))
}
