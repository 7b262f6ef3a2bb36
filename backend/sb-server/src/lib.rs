pub mod api;
pub mod app_state;
pub mod credential_store;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod validator;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{login, register},
        login_request::LoginRequest,
        register_request::RegisterRequest,
        token_response::TokenResponse,
    },
    crowds::{crowd_query::CrowdQuery, crowds::get_crowds},
    error::ApiError,
    error::Result as ApiResult,
    extractors::authenticated_user::AuthenticatedUser,
    matches::{
        matches::{get_match, get_stadium_matches, list_matches},
        stadium_matches_response::StadiumMatchesResponse,
    },
    message_response::MessageResponse,
    notifications::{
        notifications::register_push_token, register_push_token_request::RegisterPushTokenRequest,
    },
    schedules::{
        create_schedule_request::CreateScheduleRequest,
        create_schedule_response::CreateScheduleResponse,
        schedule_dto::ScheduleDto,
        schedule_list_response::ScheduleListResponse,
        schedules::{create_schedule, delete_schedule, list_schedules},
    },
    stadiums::stadiums::{get_stadium, list_stadiums},
    traffic::{traffic::get_traffic, traffic_query::TrafficQuery, traffic_response::TrafficResponse},
    weather::{weather::get_weather, weather_query::WeatherQuery, weather_response::WeatherResponse},
};

pub use crate::app_state::AppState;
pub use crate::credential_store::CredentialStore;
pub use crate::error::{Result as ServerResult, ServerError};
pub use crate::routes::build_router;
pub use crate::validator::RequestValidator;
