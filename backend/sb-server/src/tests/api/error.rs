use crate::ApiError;

use sb_auth::AuthError;
use sb_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn into_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let (status, json) = into_json(ApiError::not_found("Schedule not found")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Schedule not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let (status, json) =
        into_json(ApiError::validation("schedule_name cannot be empty", "schedule_name")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "schedule_name");
}

#[tokio::test]
async fn test_invalid_credentials_always_uses_generic_message() {
    let error = ApiError::InvalidCredentials {
        location: ErrorLocation::from(Location::caller()),
    };
    let (status, json) = into_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "INVALID_CREDENTIALS");
    assert_eq!(json["error"]["message"], "Invalid email or password");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let (status, json) = into_json(ApiError::internal("boom")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn test_expired_token_converts_to_unauthorized_without_reason() {
    let error = ApiError::from(AuthError::TokenExpired {
        location: ErrorLocation::from(Location::caller()),
    });
    let (status, json) = into_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
    assert_eq!(json["error"]["message"], "Access token expired");
}

#[test]
fn test_bad_signature_converts_to_unauthorized() {
    let error = ApiError::from(AuthError::BadSignature {
        location: ErrorLocation::from(Location::caller()),
    });

    assert!(matches!(error, ApiError::Unauthorized { .. }));
}

#[test]
fn test_password_hash_failure_converts_to_internal() {
    let error = ApiError::from(AuthError::PasswordHash {
        message: "bad params".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    assert!(matches!(error, ApiError::Internal { .. }));
}

#[tokio::test]
async fn test_duplicate_email_converts_to_400() {
    let error = ApiError::from(DbError::DuplicateEmail {
        email: "a@b.com".into(),
        location: ErrorLocation::from(Location::caller()),
    });
    let (status, json) = into_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "DUPLICATE_EMAIL");
}

#[tokio::test]
async fn test_database_error_does_not_leak_details() {
    let error = ApiError::from(DbError::CorruptRow {
        message: "match_ids column: expected value at line 1".into(),
        location: ErrorLocation::from(Location::caller()),
    });
    let (status, json) = into_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["message"], "Database operation failed");
}
