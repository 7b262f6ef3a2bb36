use crate::repositories::{parse_timestamp, parse_uuid};
use crate::{DbError, Result as DbErrorResult};

use sb_core::PushRegistration;

use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(FromRow)]
struct PushTokenRow {
    user_id: String,
    device_token: String,
    updated_at: i64,
}

impl TryFrom<PushTokenRow> for PushRegistration {
    type Error = DbError;

    fn try_from(r: PushTokenRow) -> DbErrorResult<Self> {
        Ok(PushRegistration {
            owner_id: parse_uuid(&r.user_id, "push_tokens.user_id")?,
            device_token: r.device_token,
            updated_at: parse_timestamp(r.updated_at, "push_tokens.updated_at")?,
        })
    }
}

pub struct PushTokenRepository {
    pool: SqlitePool,
}

impl PushTokenRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert or replace the owner's device token
    pub async fn upsert(&self, registration: &PushRegistration) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO push_tokens (user_id, device_token, updated_at)
              VALUES (?, ?, ?)
              ON CONFLICT(user_id) DO UPDATE SET
                  device_token = excluded.device_token,
                  updated_at = excluded.updated_at
              "#,
        )
        .bind(registration.owner_id.to_string())
        .bind(&registration.device_token)
        .bind(registration.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_owner(&self, owner_id: Uuid) -> DbErrorResult<Option<PushRegistration>> {
        let row = sqlx::query_as::<_, PushTokenRow>(
            r#"
              SELECT user_id, device_token, updated_at
              FROM push_tokens
              WHERE user_id = ?
              "#,
        )
        .bind(owner_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(PushRegistration::try_from).transpose()
    }
}
