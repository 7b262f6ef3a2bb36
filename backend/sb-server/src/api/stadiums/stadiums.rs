//! Stadium catalog handlers

use crate::{ApiError, ApiResult, AppState};

use sb_catalog::StadiumRecord;

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{Path, State},
};

/// GET /api/stadiums
///
/// Every stadium keyed by its id
pub async fn list_stadiums(State(state): State<AppState>) -> Json<BTreeMap<String, StadiumRecord>> {
    Json(state.catalog.stadiums().clone())
}

/// GET /api/stadiums/:stadium_id
pub async fn get_stadium(
    State(state): State<AppState>,
    Path(stadium_id): Path<String>,
) -> ApiResult<Json<StadiumRecord>> {
    state
        .catalog
        .stadium(&stadium_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("Stadium {} not found", stadium_id)))
}
