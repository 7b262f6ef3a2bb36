use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_TOKEN_TTL_DAYS, MAX_TOKEN_TTL_DAYS,
    MIN_JWT_SECRET_LENGTH, MIN_TOKEN_TTL_DAYS,
};

use serde::Deserialize;

/// Access-token signing settings.
///
/// There is no built-in secret: `jwt_secret` must come from `config.toml`
/// or `SB_AUTH_JWT_SECRET`, otherwise `validate()` refuses to start.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret
    pub jwt_secret: Option<String>,
    /// Lifetime of issued access tokens
    pub token_ttl_days: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_days: DEFAULT_TOKEN_TTL_DAYS,
        }
    }
}

// Keeps the secret out of `{:?}` output.
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field(
                "jwt_secret",
                &self.jwt_secret.as_ref().map(|_| "<redacted>"),
            )
            .field("token_ttl_days", &self.token_ttl_days)
            .finish()
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let secret = self.jwt_secret.as_deref().ok_or_else(|| {
            ConfigError::auth("auth.jwt_secret is required (set SB_AUTH_JWT_SECRET)")
        })?;

        if secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::auth(format!(
                "auth.jwt_secret must be at least {} characters, got {}",
                MIN_JWT_SECRET_LENGTH,
                secret.len()
            )));
        }

        if self.token_ttl_days < MIN_TOKEN_TTL_DAYS || self.token_ttl_days > MAX_TOKEN_TTL_DAYS {
            return Err(ConfigError::auth(format!(
                "auth.token_ttl_days must be {}-{}, got {}",
                MIN_TOKEN_TTL_DAYS, MAX_TOKEN_TTL_DAYS, self.token_ttl_days
            )));
        }

        Ok(())
    }
}
