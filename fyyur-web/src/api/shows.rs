//! Show JSON endpoints

use axum::{extract::State, Json};
use fyyur_common::listing::{self, ShowSummary};

use crate::error::ApiError;
use crate::AppState;

/// GET /api/shows
///
/// Every show with its venue and artist, ordered by start time.
pub async fn list_shows(State(state): State<AppState>) -> Result<Json<Vec<ShowSummary>>, ApiError> {
    let rows = state.catalog.show_rows().await?;
    Ok(Json(listing::show_summaries(rows)))
}
