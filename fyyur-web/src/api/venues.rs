//! Venue JSON endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use fyyur_common::listing::{self, CityArea, SearchResults, VenueDetail};
use fyyur_common::time::now;
use serde::Deserialize;

use crate::error::ApiError;
use crate::AppState;

/// Query parameters for name search
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    /// Case-insensitive substring; empty matches everything
    #[serde(default)]
    pub search_term: String,
}

/// GET /api/venues
///
/// Venues grouped by city and state, each with its upcoming-show count.
pub async fn list_venues(State(state): State<AppState>) -> Result<Json<Vec<CityArea>>, ApiError> {
    let venues = state.catalog.list_venues().await?;
    let shows = state.catalog.list_shows().await?;
    Ok(Json(listing::group_venues_by_city(&venues, &shows, &now())))
}

/// GET /api/venues/search?search_term=...
pub async fn search_venues(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResults>, ApiError> {
    let venues = state.catalog.list_venues().await?;
    let shows = state.catalog.list_shows().await?;
    Ok(Json(listing::search_venues(&venues, &shows, &query.search_term, &now())))
}

/// GET /api/venues/:venue_id
pub async fn get_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<i64>,
) -> Result<Json<VenueDetail>, ApiError> {
    let venue = state.catalog.get_venue(venue_id).await?;
    let rows = state.catalog.show_rows_for_venue(venue_id).await?;
    Ok(Json(listing::venue_detail(venue, rows, &now())))
}
