//! Push notification registration

use crate::{
    ApiError, ApiResult, AppState, AuthenticatedUser, MessageResponse, RegisterPushTokenRequest,
    RequestValidator,
};

use sb_core::PushRegistration;
use sb_db::PushTokenRepository;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

/// POST /api/notifications/register
///
/// Store the caller's device token, replacing any previous one
pub async fn register_push_token(
    State(state): State<AppState>,
    AuthenticatedUser(owner_id): AuthenticatedUser,
    payload: Result<Json<RegisterPushTokenRequest>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Json(req) = payload.map_err(ApiError::from)?;

    RequestValidator::new(&state.validation).validate_device_token(&req.device_token)?;

    let registration = PushRegistration::new(owner_id, req.device_token);
    PushTokenRepository::new(state.pool.clone())
        .upsert(&registration)
        .await?;

    log::info!("Registered push token for user {}", owner_id);
    Ok(Json(MessageResponse::new("Push token registered successfully")))
}
