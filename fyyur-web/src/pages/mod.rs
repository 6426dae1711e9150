//! HTML pages
//!
//! Listing and detail pages render from the listing aggregator; create and
//! edit pages post back to themselves and land on the home page with a
//! flash message, or on the detail page after a successful edit.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::{request::Parts, StatusCode},
    response::Html,
    routing::{get, post},
    Router,
};

use crate::error::{ApiError, PageError};
use crate::AppState;

pub mod artists;
pub mod home;
pub mod layout;
pub mod shows;
pub mod venues;

/// Build the HTML page routes
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/venues", get(venues::list))
        .route("/venues/search", post(venues::search))
        .route("/venues/create", get(venues::create_form).post(venues::create_submission))
        .route("/venues/:venue_id", get(venues::detail))
        .route("/venues/:venue_id/edit", get(venues::edit_form).post(venues::edit_submission))
        .route("/artists", get(artists::list))
        .route("/artists/search", post(artists::search))
        .route("/artists/create", get(artists::create_form).post(artists::create_submission))
        .route("/artists/:artist_id", get(artists::detail))
        .route("/artists/:artist_id/edit", get(artists::edit_form).post(artists::edit_submission))
        .route("/shows", get(shows::list))
        .route("/shows/create", get(shows::create_form).post(shows::create_submission))
}

/// Integer record id taken from the path
///
/// A segment that is not an integer names no record, so it is rejected
/// with the 404 page rather than a 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordId(pub i64);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for RecordId {
    type Rejection = PageError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::NotFound(e.to_string()))?;
        raw.parse()
            .map(RecordId)
            .map_err(|_| {
                PageError::from(ApiError::NotFound(format!("no record with id '{}'", raw)))
            })
    }
}

/// Fallback for paths no route matches
pub async fn not_found() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(layout::not_found_page()))
}
