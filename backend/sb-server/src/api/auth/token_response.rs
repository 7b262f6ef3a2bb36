use sb_auth::AccessToken;

use serde::Serialize;
use uuid::Uuid;

/// Issued on both register and login
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Always "bearer"
    pub token_type: String,
    pub user_id: Uuid,
}

impl From<AccessToken> for TokenResponse {
    fn from(token: AccessToken) -> Self {
        Self {
            access_token: token.token,
            token_type: AccessToken::TOKEN_TYPE.to_string(),
            user_id: token.subject_id,
        }
    }
}
