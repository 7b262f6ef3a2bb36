//! Registration and login against the user table.
//!
//! Password hashing is deliberately slow, so both directions run on the
//! blocking pool instead of a runtime worker.

use crate::{ApiError, ApiResult};

use sb_auth::{hash_password, verify_password};
use sb_core::User;
use sb_db::UserRepository;

use std::panic::Location;
use std::sync::OnceLock;

use error_location::ErrorLocation;
use sqlx::SqlitePool;

/// Compared against when the email is unknown, so that a miss costs the
/// same hashing work as a wrong password.
static UNKNOWN_USER_HASH: OnceLock<Option<String>> = OnceLock::new();

pub struct CredentialStore {
    users: UserRepository,
}

impl CredentialStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            users: UserRepository::new(pool),
        }
    }

    /// Create an identity with a fresh random id.
    ///
    /// Fails with `DuplicateEmail` when the email is already registered.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        display_name: Option<String>,
    ) -> ApiResult<User> {
        let password = password.to_string();
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| ApiError::internal(format!("Password hashing task failed: {}", e)))??;

        let user = User::new(email.to_string(), password_hash, display_name);
        self.users.create(&user).await?;

        log::info!("Registered user {}", user.id);
        Ok(user)
    }

    /// Resolve an email and password to its identity.
    ///
    /// An unknown email and a wrong password yield the same error.
    pub async fn authenticate(&self, email: &str, password: &str) -> ApiResult<User> {
        let user = self.users.find_by_email(email).await?;

        let stored_hash = user.as_ref().map(|u| u.password_hash.clone());
        let password = password.to_string();
        let verified = tokio::task::spawn_blocking(move || match stored_hash {
            Some(hash) => verify_password(&password, &hash),
            None => {
                if let Some(hash) = UNKNOWN_USER_HASH
                    .get_or_init(|| hash_password("unknown-user-placeholder").ok())
                {
                    let _ = verify_password(&password, hash);
                }
                Ok(false)
            }
        })
        .await
        .map_err(|e| ApiError::internal(format!("Password verification task failed: {}", e)))??;

        match user {
            Some(user) if verified => Ok(user),
            _ => Err(ApiError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
