//! Match catalog handlers
//!
//! Read-only views over the catalog loaded at start-up.

use crate::{ApiError, ApiResult, AppState, StadiumMatchesResponse};

use sb_catalog::{MatchCatalogFile, MatchRecord};

use axum::{
    Json,
    extract::{Path, State},
};

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/matches
///
/// The whole match catalog document
pub async fn list_matches(State(state): State<AppState>) -> Json<MatchCatalogFile> {
    Json(state.catalog.document().clone())
}

/// GET /api/matches/:match_id
pub async fn get_match(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
) -> ApiResult<Json<MatchRecord>> {
    let id: i64 = match_id.parse().map_err(|_| {
        ApiError::validation(format!("Invalid match id: {}", match_id), "match_id")
    })?;

    let record = state
        .catalog
        .match_by_id(id)
        .ok_or_else(|| ApiError::not_found(format!("Match {} not found", id)))?;

    Ok(Json(record.clone()))
}

/// GET /api/matches/stadium/:stadium_id
///
/// Matches played at a stadium. An unknown stadium has no matches.
pub async fn get_stadium_matches(
    State(state): State<AppState>,
    Path(stadium_id): Path<String>,
) -> Json<StadiumMatchesResponse> {
    let matches = state
        .catalog
        .matches_for_stadium(&stadium_id)
        .into_iter()
        .cloned()
        .collect();

    Json(StadiumMatchesResponse {
        stadium_id,
        matches,
    })
}
