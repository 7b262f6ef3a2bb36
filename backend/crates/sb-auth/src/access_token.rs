use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A freshly issued, signed access token
#[derive(Debug, Clone)]
pub struct AccessToken {
    pub token: String,
    pub subject_id: Uuid,
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    /// Token type reported to clients alongside the token
    pub const TOKEN_TYPE: &'static str = "bearer";
}
