//! Artist JSON endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use fyyur_common::listing::{self, ArtistDetail, ArtistSummary, SearchResults};
use fyyur_common::time::now;

use super::venues::SearchQuery;
use crate::error::ApiError;
use crate::AppState;

/// GET /api/artists
pub async fn list_artists(
    State(state): State<AppState>,
) -> Result<Json<Vec<ArtistSummary>>, ApiError> {
    let artists = state.catalog.list_artists().await?;
    Ok(Json(listing::artist_summaries(&artists)))
}

/// GET /api/artists/search?search_term=...
pub async fn search_artists(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResults>, ApiError> {
    let artists = state.catalog.list_artists().await?;
    let shows = state.catalog.list_shows().await?;
    Ok(Json(listing::search_artists(&artists, &shows, &query.search_term, &now())))
}

/// GET /api/artists/:artist_id
pub async fn get_artist(
    State(state): State<AppState>,
    Path(artist_id): Path<i64>,
) -> Result<Json<ArtistDetail>, ApiError> {
    let artist = state.catalog.get_artist(artist_id).await?;
    let rows = state.catalog.show_rows_for_artist(artist_id).await?;
    Ok(Json(listing::artist_detail(artist, rows, &now())))
}
