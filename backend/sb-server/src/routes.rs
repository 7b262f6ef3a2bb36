use crate::{
    AppState, create_schedule, delete_schedule, get_crowds, get_match, get_stadium,
    get_stadium_matches, get_traffic, get_weather, health, list_matches, list_schedules,
    list_stadiums, login, register, register_push_token,
};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Service endpoints
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        // Identity
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        // Schedules (token required)
        .route("/api/schedules", post(create_schedule))
        .route(
            "/api/schedules/{id}",
            get(list_schedules).delete(delete_schedule),
        )
        .route("/api/notifications/register", post(register_push_token))
        // Catalog
        .route("/api/matches", get(list_matches))
        .route("/api/matches/{match_id}", get(get_match))
        .route("/api/matches/stadium/{stadium_id}", get(get_stadium_matches))
        .route("/api/stadiums", get(list_stadiums))
        .route("/api/stadiums/{stadium_id}", get(get_stadium))
        // Feeds
        .route("/api/weather/{stadium_id}", get(get_weather))
        .route("/api/traffic/{stadium_id}", get(get_traffic))
        .route("/api/crowds/{stadium_id}", get(get_crowds))
        // Add shared state
        .with_state(state)
        // The mobile client calls from any origin
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
