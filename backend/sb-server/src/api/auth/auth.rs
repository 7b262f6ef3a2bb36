//! Registration and login handlers
//!
//! Both return a freshly issued access token for the identity.

use crate::{
    ApiError, ApiResult, AppState, CredentialStore, LoginRequest, RegisterRequest,
    RequestValidator, TokenResponse,
};

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<Json<TokenResponse>> {
    let Json(req) = payload.map_err(ApiError::from)?;

    let validator = RequestValidator::new(&state.validation);
    validator.validate_email(&req.email)?;
    validator.validate_password(&req.password)?;

    let display_name = req
        .full_name
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty());

    let store = CredentialStore::new(state.pool.clone());
    let user = store.register(&req.email, &req.password, display_name).await?;

    let token = state.token_service.issue(user.id)?;
    Ok(Json(TokenResponse::from(token)))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<TokenResponse>> {
    let Json(req) = payload.map_err(ApiError::from)?;

    let store = CredentialStore::new(state.pool.clone());
    let user = store.authenticate(&req.email, &req.password).await?;

    log::debug!("Login for user {}", user.id);
    let token = state.token_service.issue(user.id)?;
    Ok(Json(TokenResponse::from(token)))
}
