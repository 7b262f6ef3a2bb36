//! Travel time to a stadium

use crate::{ApiError, ApiResult, AppState, TrafficQuery, TrafficResponse};

use sb_feeds::{Coordinates, TravelEstimate, TravelMode};

use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use chrono::Utc;

/// GET /api/traffic/:stadium_id?origin_lat=&origin_lon=&mode=
pub async fn get_traffic(
    State(state): State<AppState>,
    Path(stadium_id): Path<String>,
    query: Result<Query<TrafficQuery>, QueryRejection>,
) -> ApiResult<Json<TrafficResponse>> {
    let Query(query) = query.map_err(ApiError::from)?;

    let stadium = state
        .catalog
        .stadium(&stadium_id)
        .ok_or_else(|| ApiError::not_found(format!("Stadium {} not found", stadium_id)))?;

    let origin_lat = query
        .origin_lat
        .ok_or_else(|| ApiError::validation("origin_lat is required", "origin_lat"))?;
    let origin_lon = query
        .origin_lon
        .ok_or_else(|| ApiError::validation("origin_lon is required", "origin_lon"))?;
    let origin = Coordinates::new(origin_lat, origin_lon);
    if !origin.is_valid() {
        return Err(ApiError::validation(
            "origin coordinates are out of range",
            "origin",
        ));
    }

    let mode = match query.mode.as_deref() {
        None => TravelMode::default(),
        Some(value) => TravelMode::from_str(value).map_err(|e| ApiError::validation(e, "mode"))?,
    };

    let estimate = match stadium.location.coordinates() {
        Some((lat, lon)) => {
            state
                .traffic
                .travel_time(origin, Coordinates::new(lat, lon), mode)
                .await
        }
        None => {
            log::warn!("Stadium {} has no coordinates, serving fallback traffic", stadium_id);
            TravelEstimate::fallback(Utc::now())
        }
    };

    Ok(Json(TrafficResponse {
        stadium_id,
        origin,
        estimate,
    }))
}
