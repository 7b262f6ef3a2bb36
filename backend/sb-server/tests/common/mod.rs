#![allow(dead_code)]

//! Test infrastructure for sb-server API tests

use sb_auth::TokenService;
use sb_catalog::{Catalog, MatchCatalogFile, StadiumRecord};
use sb_config::ValidationConfig;
use sb_db::Database;
use sb_feeds::{CrowdForecaster, TrafficService, WeatherService, build_http_client};
use sb_server::{AppState, build_router};

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_SECRET: &str = "integration-test-secret-0123456789";
pub const TEST_PASSWORD: &str = "pw123";

/// Nothing listens on the discard port, so any provider call fails fast
const UNREACHABLE_PROVIDER: &str = "http://127.0.0.1:9";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    Database::in_memory()
        .await
        .expect("Failed to create test database")
}

/// AppState with the sample catalog and unconfigured providers
pub async fn create_test_app_state() -> AppState {
    create_test_app_state_with_weather(UNREACHABLE_PROVIDER, None).await
}

/// AppState whose weather provider points at `weather_base_url`
pub async fn create_test_app_state_with_weather(
    weather_base_url: &str,
    weather_key: Option<&str>,
) -> AppState {
    let pool = create_test_pool().await;
    let client = build_http_client(Duration::from_secs(2)).expect("Failed to build client");

    AppState {
        pool,
        token_service: Arc::new(TokenService::with_hs256(
            TEST_SECRET.as_bytes(),
            chrono::Duration::days(sb_config::DEFAULT_TOKEN_TTL_DAYS),
        )),
        catalog: Arc::new(sample_catalog()),
        weather: Arc::new(WeatherService::new(
            client.clone(),
            weather_key.map(String::from),
            weather_base_url,
        )),
        traffic: Arc::new(TrafficService::new(client, None, UNREACHABLE_PROVIDER)),
        crowds: CrowdForecaster::new(),
        validation: ValidationConfig::default(),
    }
}

/// Three matches over two stadiums; BC Place has no coordinates
pub fn sample_catalog() -> Catalog {
    let document: MatchCatalogFile = serde_json::from_value(json!({
        "tournament": "FIFA World Cup 2026",
        "matches": [
            { "match_id": 1, "stadium_id": "metlife", "home_team": "USA", "away_team": "Wales" },
            { "match_id": 2, "stadium_id": "bc_place", "home_team": "Canada", "away_team": "Japan" },
            { "match_id": 3, "stadium_id": "metlife", "home_team": "Brazil", "away_team": "Chile" }
        ]
    }))
    .expect("valid match document");

    let metlife: StadiumRecord = serde_json::from_value(json!({
        "stadium_id": "metlife",
        "name": "MetLife Stadium",
        "capacity": 82500,
        "location": { "city": "East Rutherford", "latitude": 40.8135, "longitude": -74.0745 }
    }))
    .expect("valid stadium");

    let bc_place: StadiumRecord = serde_json::from_value(json!({
        "stadium_id": "bc_place",
        "name": "BC Place",
        "location": { "city": "Vancouver" }
    }))
    .expect("valid stadium");

    Catalog::from_parts(document, vec![metlife, bc_place])
}

/// Send one request through a fresh router and decode the JSON body
pub async fn send(
    state: &AppState,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let app = build_router(state.clone());

    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };

    (status, json)
}

/// Register through the API and return `(access_token, user_id)`
pub async fn register_user(state: &AppState, email: &str) -> (String, Uuid) {
    let (status, json) = send(
        state,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({ "email": email, "password": TEST_PASSWORD })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "register failed: {}", json);

    let token = json["access_token"].as_str().unwrap().to_string();
    let user_id = Uuid::parse_str(json["user_id"].as_str().unwrap()).unwrap();
    (token, user_id)
}

/// Create a schedule through the API and return its id
pub async fn create_schedule(state: &AppState, token: &str, name: &str, match_ids: &[i64]) -> String {
    let (status, json) = send(
        state,
        "POST",
        "/api/schedules",
        Some(token),
        Some(json!({ "schedule_name": name, "match_ids": match_ids })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {}", json);

    json["schedule_id"].as_str().unwrap().to_string()
}
