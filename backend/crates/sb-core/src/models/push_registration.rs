use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The single active push-notification device token of a user.
/// Registering again replaces the previous token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushRegistration {
    pub owner_id: Uuid,
    pub device_token: String,
    pub updated_at: DateTime<Utc>,
}

impl PushRegistration {
    pub fn new(owner_id: Uuid, device_token: String) -> Self {
        Self {
            owner_id,
            device_token,
            updated_at: Utc::now(),
        }
    }
}
