use crate::tests::create_test_state;
use crate::{ApiError, AppState, AuthenticatedUser};

use sb_auth::TokenService;
use sb_core::User;
use sb_db::UserRepository;

use axum::{body::Body, extract::FromRequestParts, http::Request};
use chrono::{Duration, Utc};
use uuid::Uuid;

async fn create_identity(state: &AppState) -> Uuid {
    let user = User::new("fan@example.com".into(), "not-a-real-hash".into(), None);
    UserRepository::new(state.pool.clone())
        .create(&user)
        .await
        .unwrap();
    user.id
}

async fn extract(state: &AppState, request: Request<Body>) -> Result<AuthenticatedUser, ApiError> {
    let (mut parts, _body) = request.into_parts();
    AuthenticatedUser::from_request_parts(&mut parts, state).await
}

#[tokio::test]
async fn test_extractor_with_valid_bearer_header() {
    let state = create_test_state().await;
    let user_id = create_identity(&state).await;
    let token = state.token_service.issue(user_id).unwrap().token;

    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let result = extract(&state, request).await;

    assert_eq!(result.unwrap().0, user_id);
}

#[tokio::test]
async fn test_extractor_falls_back_to_token_query_parameter() {
    let state = create_test_state().await;
    let user_id = create_identity(&state).await;
    let token = state.token_service.issue(user_id).unwrap().token;

    let request = Request::builder()
        .uri(format!("/api/schedules?token={}", token))
        .body(Body::empty())
        .unwrap();

    let result = extract(&state, request).await;

    assert_eq!(result.unwrap().0, user_id);
}

#[tokio::test]
async fn test_extractor_rejects_missing_token() {
    let state = create_test_state().await;
    let request = Request::builder()
        .uri("/api/schedules")
        .body(Body::empty())
        .unwrap();

    let result = extract(&state, request).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_extractor_rejects_non_bearer_scheme_even_with_query_token() {
    let state = create_test_state().await;
    let user_id = create_identity(&state).await;
    let token = state.token_service.issue(user_id).unwrap().token;

    let request = Request::builder()
        .uri(format!("/api/schedules?token={}", token))
        .header("Authorization", "Basic dXNlcjpwYXNz")
        .body(Body::empty())
        .unwrap();

    let result = extract(&state, request).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_extractor_rejects_expired_token() {
    let state = create_test_state().await;
    let user_id = create_identity(&state).await;
    let issued_at = Utc::now() - state.token_service.ttl() - Duration::minutes(1);
    let token = state
        .token_service
        .issue_at(user_id, issued_at)
        .unwrap()
        .token;

    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let result = extract(&state, request).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_extractor_rejects_token_signed_with_other_key() {
    let state = create_test_state().await;
    let user_id = create_identity(&state).await;
    let forged =
        TokenService::with_hs256(b"a-completely-different-secret-key!!", chrono::Duration::days(1))
            .issue(user_id)
            .unwrap()
            .token;

    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", forged))
        .body(Body::empty())
        .unwrap();

    let result = extract(&state, request).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_extractor_rejects_valid_token_for_unknown_identity() {
    let state = create_test_state().await;
    let token = state.token_service.issue(Uuid::new_v4()).unwrap().token;

    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let result = extract(&state, request).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}
