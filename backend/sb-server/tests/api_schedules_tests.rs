//! Integration tests for schedule API handlers
mod common;

use crate::common::{create_schedule, create_test_app_state, register_user, send};

use sb_auth::TokenService;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn test_schedule_lifecycle_register_create_list_delete() {
    let state = create_test_app_state().await;
    let (token, user_id) = register_user(&state, "fan@example.com").await;

    // Create
    let (status, created) = send(
        &state,
        "POST",
        "/api/schedules",
        Some(&token),
        Some(json!({ "schedule_name": "Group stage", "match_ids": [101, 102, 102, 103] })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["schedule_name"], "Group stage");
    assert_eq!(created["match_ids"], json!([101, 102, 102, 103]));
    let schedule_id = created["schedule_id"].as_str().unwrap().to_string();

    // List
    let (status, listed) = send(
        &state,
        "GET",
        &format!("/api/schedules/{}", user_id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["user_id"], user_id.to_string());
    let schedules = listed["schedules"].as_array().unwrap();
    assert_eq!(schedules.len(), 1);
    assert_eq!(schedules[0]["schedule_id"], schedule_id);
    assert_eq!(schedules[0]["match_ids"], json!([101, 102, 102, 103]));
    assert!(schedules[0]["created_at"].is_string());
    assert!(schedules[0]["updated_at"].is_string());

    // Delete
    let (status, deleted) = send(
        &state,
        "DELETE",
        &format!("/api/schedules/{}", schedule_id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["message"], "Schedule deleted successfully");

    // Empty again
    let (_, listed) = send(
        &state,
        "GET",
        &format!("/api/schedules/{}", user_id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(listed["schedules"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_delete_someone_elses_schedule_returns_404_and_keeps_it() {
    let state = create_test_app_state().await;
    let (owner_token, owner_id) = register_user(&state, "owner@example.com").await;
    let (intruder_token, _) = register_user(&state, "intruder@example.com").await;
    let schedule_id = create_schedule(&state, &owner_token, "Knockouts", &[73, 74]).await;

    let (status, json) = send(
        &state,
        "DELETE",
        &format!("/api/schedules/{}", schedule_id),
        Some(&intruder_token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");

    let (_, listed) = send(
        &state,
        "GET",
        &format!("/api/schedules/{}", owner_id),
        Some(&owner_token),
        None,
    )
    .await;
    assert_eq!(listed["schedules"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_missing_schedule_matches_not_owned_response() {
    let state = create_test_app_state().await;
    let (token, _) = register_user(&state, "fan@example.com").await;

    let (missing_status, missing) = send(
        &state,
        "DELETE",
        &format!("/api/schedules/{}", Uuid::new_v4()),
        Some(&token),
        None,
    )
    .await;
    let (garbage_status, garbage) = send(
        &state,
        "DELETE",
        "/api/schedules/not-a-uuid",
        Some(&token),
        None,
    )
    .await;

    assert_eq!(missing_status, StatusCode::NOT_FOUND);
    assert_eq!(garbage_status, StatusCode::NOT_FOUND);
    assert_eq!(missing["error"]["code"], garbage["error"]["code"]);
}

#[tokio::test]
async fn test_schedule_routes_require_token() {
    let state = create_test_app_state().await;

    let (create_status, json) = send(
        &state,
        "POST",
        "/api/schedules",
        None,
        Some(json!({ "schedule_name": "Finals", "match_ids": [104] })),
    )
    .await;
    let (list_status, _) = send(
        &state,
        "GET",
        &format!("/api/schedules/{}", Uuid::new_v4()),
        None,
        None,
    )
    .await;

    assert_eq!(create_status, StatusCode::UNAUTHORIZED);
    assert_eq!(list_status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_expired_token_is_rejected_without_side_effects() {
    let state = create_test_app_state().await;
    let (_, user_id) = register_user(&state, "fan@example.com").await;
    let expired = state
        .token_service
        .issue_at(user_id, Utc::now() - Duration::days(8))
        .unwrap()
        .token;

    let (status, _) = send(
        &state,
        "POST",
        "/api/schedules",
        Some(&expired),
        Some(json!({ "schedule_name": "Too late", "match_ids": [1] })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM schedules")
        .fetch_one(&state.pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_token_from_other_key_is_rejected() {
    let state = create_test_app_state().await;
    let (_, user_id) = register_user(&state, "fan@example.com").await;
    let forged =
        TokenService::with_hs256(b"some-other-secret-that-is-long-enough", chrono::Duration::days(1))
            .issue(user_id)
            .unwrap()
            .token;

    let (status, _) = send(
        &state,
        "GET",
        &format!("/api/schedules/{}", user_id),
        Some(&forged),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_query_parameter_is_accepted() {
    let state = create_test_app_state().await;
    let (token, user_id) = register_user(&state, "fan@example.com").await;

    let (status, json) = send(
        &state,
        "GET",
        &format!("/api/schedules/{}?token={}", user_id, token),
        None,
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["user_id"], user_id.to_string());
}

#[tokio::test]
async fn test_create_schedule_rejects_blank_name() {
    let state = create_test_app_state().await;
    let (token, _) = register_user(&state, "fan@example.com").await;

    let (status, json) = send(
        &state,
        "POST",
        "/api/schedules",
        Some(&token),
        Some(json!({ "schedule_name": "  ", "match_ids": [1] })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["field"], "schedule_name");
}

#[tokio::test]
async fn test_list_schedules_rejects_non_uuid_owner() {
    let state = create_test_app_state().await;
    let (token, _) = register_user(&state, "fan@example.com").await;

    let (status, json) = send(&state, "GET", "/api/schedules/nobody", Some(&token), None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["field"], "user_id");
}

#[tokio::test]
async fn test_create_schedule_keeps_name_exactly_as_sent() {
    let state = create_test_app_state().await;
    let (token, user_id) = register_user(&state, "fan@example.com").await;

    let (status, created) = send(
        &state,
        "POST",
        "/api/schedules",
        Some(&token),
        Some(json!({ "schedule_name": "  Road to the Final ", "match_ids": [104] })),
    )
    .await;
    let (_, listed) = send(
        &state,
        "GET",
        &format!("/api/schedules/{}", user_id),
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["schedule_name"], "  Road to the Final ");
    assert_eq!(listed["schedules"][0]["schedule_name"], "  Road to the Final ");
}
