use crate::repositories::{parse_timestamp, parse_uuid};
use crate::{DbError, Result as DbErrorResult};

use sb_core::Schedule;

use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(FromRow)]
struct ScheduleRow {
    id: String,
    user_id: String,
    schedule_name: String,
    match_ids: String,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<ScheduleRow> for Schedule {
    type Error = DbError;

    fn try_from(r: ScheduleRow) -> DbErrorResult<Self> {
        Ok(Schedule {
            id: parse_uuid(&r.id, "schedules.id")?,
            owner_id: parse_uuid(&r.user_id, "schedules.user_id")?,
            name: r.schedule_name,
            match_ids: Schedule::parse_match_ids(&r.match_ids)?,
            created_at: parse_timestamp(r.created_at, "schedules.created_at")?,
            updated_at: parse_timestamp(r.updated_at, "schedules.updated_at")?,
        })
    }
}

pub struct ScheduleRepository {
    pool: SqlitePool,
}

impl ScheduleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, schedule: &Schedule) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO schedules (
                  id, user_id, schedule_name, match_ids, created_at, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(schedule.id.to_string())
        .bind(schedule.owner_id.to_string())
        .bind(&schedule.name)
        .bind(schedule.match_ids_json())
        .bind(schedule.created_at.timestamp())
        .bind(schedule.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn list_for_owner(&self, owner_id: Uuid) -> DbErrorResult<Vec<Schedule>> {
        let rows = sqlx::query_as::<_, ScheduleRow>(
            r#"
              SELECT id, user_id, schedule_name, match_ids, created_at, updated_at
              FROM schedules
              WHERE user_id = ?
              ORDER BY created_at ASC, rowid ASC
              "#,
        )
        .bind(owner_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Schedule::try_from).collect()
    }

    /// Delete a schedule only if `owner_id` owns it.
    ///
    /// Returns false both when the id does not exist and when it belongs to
    /// someone else; callers must not tell the two apart.
    pub async fn delete_owned(&self, id: Uuid, owner_id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM schedules WHERE id = ? AND user_id = ?")
            .bind(id.to_string())
            .bind(owner_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
