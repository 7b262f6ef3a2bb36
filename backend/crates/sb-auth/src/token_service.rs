use crate::{AccessToken, AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use chrono::{DateTime, Duration, Utc};
use error_location::ErrorLocation;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

/// Issues and verifies HS256 access tokens.
///
/// Tokens are self-contained: there is no session table and no revocation,
/// so a token proves its subject until `exp`.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    /// Create a token service with HS256 (symmetric secret) whose tokens
    /// live for `ttl`
    pub fn with_hs256(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    #[track_caller]
    pub fn issue(&self, subject_id: Uuid) -> AuthErrorResult<AccessToken> {
        self.issue_at(subject_id, Utc::now())
    }

    /// Issue a token as if it were minted at `issued_at`
    #[track_caller]
    pub fn issue_at(
        &self,
        subject_id: Uuid,
        issued_at: DateTime<Utc>,
    ) -> AuthErrorResult<AccessToken> {
        let expires_at = issued_at + self.ttl;
        let claims = Claims {
            sub: subject_id.to_string(),
            exp: expires_at.timestamp(),
            iat: issued_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|source| AuthError::JwtEncode {
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(AccessToken {
            token,
            subject_id,
            expires_at,
        })
    }

    /// Verify a token and return the subject it was issued for
    #[track_caller]
    pub fn verify(&self, token: &str) -> AuthErrorResult<Uuid> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    ErrorKind::InvalidSignature => AuthError::BadSignature {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::MalformedToken {
                        message: e.to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        token_data.claims.subject_id()
    }

    /// Get the algorithm being used (for logging)
    pub fn algorithm(&self) -> &'static str {
        "HS256"
    }
}
