use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET / - Service banner
pub async fn root() -> Response {
    let banner = json!({
        "message": "FIFA 2026 Schedule Builder API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
    });

    (StatusCode::OK, Json(banner)).into_response()
}

/// GET /health - Liveness plus a database round trip
pub async fn health_check(State(state): State<AppState>) -> Response {
    let database_ok = match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => true,
        Err(e) => {
            log::error!("Health check database probe failed: {}", e);
            false
        }
    };

    let (status, code) = if database_ok {
        ("healthy", StatusCode::OK)
    } else {
        ("degraded", StatusCode::SERVICE_UNAVAILABLE)
    };

    let health = json!({
        "status": status,
        "version": env!("CARGO_PKG_VERSION"),
        "database": if database_ok { "connected" } else { "unavailable" },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (code, Json(health)).into_response()
}
