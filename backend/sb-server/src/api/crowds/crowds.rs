//! Crowd forecast handler

use crate::{ApiError, ApiResult, AppState, CrowdQuery};

use sb_feeds::CrowdForecast;

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use chrono::Utc;

/// GET /api/crowds/:stadium_id?match_id=&at=
///
/// Answers for any stadium id, known or not.
pub async fn get_crowds(
    State(state): State<AppState>,
    Path(stadium_id): Path<String>,
    query: Result<Query<CrowdQuery>, QueryRejection>,
) -> ApiResult<Json<CrowdForecast>> {
    let Query(query) = query.map_err(ApiError::from)?;

    let at = query.at.unwrap_or_else(Utc::now);
    Ok(Json(state.crowds.forecast(&stadium_id, query.match_id, at)))
}
