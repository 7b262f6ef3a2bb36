//! Stadium weather handler

use crate::{ApiError, ApiResult, AppState, WeatherQuery, WeatherResponse};

use sb_feeds::{Coordinates, WeatherReport};

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use chrono::{NaiveDate, Utc};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// GET /api/weather/:stadium_id?date=YYYY-MM-DD
///
/// Current conditions for today, otherwise the forecast. Provider failures
/// are served as fallback data, never as errors.
pub async fn get_weather(
    State(state): State<AppState>,
    Path(stadium_id): Path<String>,
    query: Result<Query<WeatherQuery>, QueryRejection>,
) -> ApiResult<Json<WeatherResponse>> {
    let Query(query) = query.map_err(ApiError::from)?;

    let stadium = state
        .catalog
        .stadium(&stadium_id)
        .ok_or_else(|| ApiError::not_found(format!("Stadium {} not found", stadium_id)))?;

    let today = Utc::now().date_naive();
    let date = match query.date.as_deref().map(str::trim) {
        None | Some("") => today,
        Some(value) => NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| {
            ApiError::validation(
                format!("Invalid date '{}', expected YYYY-MM-DD", value),
                "date",
            )
        })?,
    };

    let report = match stadium.location.coordinates() {
        Some((lat, lon)) if date == today => state.weather.current(Coordinates::new(lat, lon)).await,
        Some((lat, lon)) => state.weather.forecast(Coordinates::new(lat, lon)).await,
        None => {
            log::warn!("Stadium {} has no coordinates, serving fallback weather", stadium_id);
            WeatherReport::fallback(Utc::now())
        }
    };

    Ok(Json(WeatherResponse {
        location: stadium.location.city.clone(),
        stadium_id,
        date: date.format(DATE_FORMAT).to_string(),
        report,
    }))
}
