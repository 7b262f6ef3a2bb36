//! Identity resolution for protected routes

use crate::{ApiError, AppState};

use sb_auth::{AuthError, bearer_token};
use sb_db::UserRepository;

use std::future::Future;
use std::panic::Location;

use axum::{
    extract::{FromRequestParts, Query},
    http::{header::AUTHORIZATION, request::Parts},
};
use error_location::ErrorLocation;
use serde::Deserialize;
use uuid::Uuid;

/// The verified subject of the request's access token.
///
/// The token is read from `Authorization: Bearer <token>`, or from the
/// `token` query parameter when no Authorization header is sent. A present
/// but unusable header is rejected rather than falling back to the query.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser(pub Uuid);

#[derive(Deserialize)]
struct TokenQuery {
    token: Option<String>,
}

impl AuthenticatedUser {
    #[track_caller]
    pub fn token_from_parts(parts: &Parts) -> Result<String, AuthError> {
        if let Some(value) = parts.headers.get(AUTHORIZATION) {
            let value = value.to_str().map_err(|_| AuthError::InvalidScheme {
                location: ErrorLocation::from(Location::caller()),
            })?;
            return Ok(bearer_token(value)?.to_string());
        }

        match Query::<TokenQuery>::try_from_uri(&parts.uri) {
            Ok(Query(TokenQuery { token: Some(token) })) if !token.trim().is_empty() => {
                Ok(token.trim().to_string())
            }
            _ => Err(AuthError::MissingToken {
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let token = Self::token_from_parts(parts)?;
            let subject_id = state.token_service.verify(&token)?;

            // A valid signature for an identity that is gone is still unauthorized
            let user = UserRepository::new(state.pool.clone())
                .find_by_id(subject_id)
                .await?;
            if user.is_none() {
                return Err(ApiError::Unauthorized {
                    message: "Invalid access token".to_string(),
                    reason: format!("no identity {}", subject_id),
                    location: ErrorLocation::from(Location::caller()),
                });
            }

            log::debug!("Authenticated request for {}", subject_id);
            Ok(AuthenticatedUser(subject_id))
        }
    }
}
