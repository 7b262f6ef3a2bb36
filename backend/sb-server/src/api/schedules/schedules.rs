//! Schedule REST API handlers
//!
//! Every route requires an access token. Creation and deletion act on behalf
//! of the token's subject only.

use crate::{
    ApiError, ApiResult, AppState, AuthenticatedUser, CreateScheduleRequest,
    CreateScheduleResponse, MessageResponse, RequestValidator, ScheduleDto, ScheduleListResponse,
};

use sb_core::Schedule;
use sb_db::ScheduleRepository;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/schedules
///
/// Create a schedule owned by the caller
pub async fn create_schedule(
    State(state): State<AppState>,
    AuthenticatedUser(owner_id): AuthenticatedUser,
    payload: Result<Json<CreateScheduleRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CreateScheduleResponse>)> {
    let Json(req) = payload.map_err(ApiError::from)?;

    RequestValidator::new(&state.validation).validate_schedule(&req.schedule_name, &req.match_ids)?;

    let schedule = Schedule::new(owner_id, req.schedule_name, req.match_ids);

    let repo = ScheduleRepository::new(state.pool.clone());
    repo.create(&schedule).await?;

    log::info!("Created schedule {} for user {}", schedule.id, owner_id);
    Ok((StatusCode::CREATED, Json(schedule.into())))
}

/// GET /api/schedules/:user_id
///
/// List the schedules owned by `user_id`
pub async fn list_schedules(
    State(state): State<AppState>,
    AuthenticatedUser(_caller): AuthenticatedUser,
    Path(user_id): Path<String>,
) -> ApiResult<Json<ScheduleListResponse>> {
    let owner_id = Uuid::parse_str(&user_id)
        .map_err(|_| ApiError::validation(format!("Invalid user id: {}", user_id), "user_id"))?;

    let repo = ScheduleRepository::new(state.pool.clone());
    let schedules = repo.list_for_owner(owner_id).await?;

    Ok(Json(ScheduleListResponse {
        user_id: owner_id,
        schedules: schedules.into_iter().map(ScheduleDto::from).collect(),
    }))
}

/// DELETE /api/schedules/:id
///
/// Delete one of the caller's schedules. A schedule that does not exist and
/// one owned by someone else are indistinguishable.
pub async fn delete_schedule(
    State(state): State<AppState>,
    AuthenticatedUser(owner_id): AuthenticatedUser,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let not_found = || ApiError::not_found(format!("Schedule {} not found", id));

    let schedule_id = Uuid::parse_str(&id).map_err(|_| not_found())?;

    let repo = ScheduleRepository::new(state.pool.clone());
    if !repo.delete_owned(schedule_id, owner_id).await? {
        return Err(not_found());
    }

    log::info!("Deleted schedule {} for user {}", schedule_id, owner_id);
    Ok(Json(MessageResponse::new("Schedule deleted successfully")))
}
