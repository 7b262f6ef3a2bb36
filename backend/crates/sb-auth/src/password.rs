//! Salted argon2id password digests.
//!
//! Hashes are stored as PHC strings, so the salt and cost parameters travel
//! with the digest and verification needs nothing else.

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use argon2::{Config, Variant};
use error_location::ErrorLocation;

const SALT_LEN: usize = 16;

/// Hash a plaintext password with a fresh random salt
#[track_caller]
pub fn hash_password(password: &str) -> AuthErrorResult<String> {
    let salt: [u8; SALT_LEN] = rand::random();
    let config = Config {
        variant: Variant::Argon2id,
        ..Config::default()
    };

    argon2::hash_encoded(password.as_bytes(), &salt, &config).map_err(|e| {
        AuthError::PasswordHash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    })
}

/// Check a plaintext password against a stored hash
#[track_caller]
pub fn verify_password(password: &str, password_hash: &str) -> AuthErrorResult<bool> {
    argon2::verify_encoded(password_hash, password.as_bytes()).map_err(|e| {
        AuthError::PasswordHash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    })
}
