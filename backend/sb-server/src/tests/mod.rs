mod api;

use crate::AppState;

use sb_auth::TokenService;
use sb_catalog::{Catalog, MatchCatalogFile, StadiumRecord};
use sb_config::ValidationConfig;
use sb_db::Database;
use sb_feeds::{CrowdForecaster, TrafficService, WeatherService, build_http_client};

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;

pub(crate) const TEST_SECRET: &str = "unit-test-secret-0123456789abcdef";

/// No API keys, so both providers answer with fallback data offline
pub(crate) async fn create_test_state() -> AppState {
    let pool = Database::in_memory()
        .await
        .expect("Failed to create test pool");
    let client = build_http_client(Duration::from_secs(1)).expect("Failed to build client");

    AppState {
        pool,
        token_service: Arc::new(TokenService::with_hs256(
            TEST_SECRET.as_bytes(),
            chrono::Duration::days(sb_config::DEFAULT_TOKEN_TTL_DAYS),
        )),
        catalog: Arc::new(sample_catalog()),
        weather: Arc::new(WeatherService::new(client.clone(), None, "http://127.0.0.1:9")),
        traffic: Arc::new(TrafficService::new(client, None, "http://127.0.0.1:9")),
        crowds: CrowdForecaster::new(),
        validation: ValidationConfig::default(),
    }
}

pub(crate) fn sample_catalog() -> Catalog {
    let document: MatchCatalogFile = serde_json::from_value(json!({
        "matches": [
            { "match_id": 1, "stadium_id": "metlife", "home_team": "USA" },
            { "match_id": 2, "stadium_id": "azteca" }
        ]
    }))
    .expect("valid match document");

    let stadium: StadiumRecord = serde_json::from_value(json!({
        "stadium_id": "metlife",
        "name": "MetLife Stadium",
        "location": { "city": "East Rutherford", "latitude": 40.8135, "longitude": -74.0745 }
    }))
    .expect("valid stadium");

    Catalog::from_parts(document, vec![stadium])
}
