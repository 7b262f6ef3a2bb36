//! Credential storage: identity rows keyed by a random id with a unique email.

use crate::repositories::{parse_timestamp, parse_uuid};
use crate::{DbError, Result as DbErrorResult};

use sb_core::User;

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(FromRow)]
struct UserRow {
    id: String,
    email: String,
    password_hash: String,
    full_name: Option<String>,
    created_at: i64,
}

impl TryFrom<UserRow> for User {
    type Error = DbError;

    fn try_from(r: UserRow) -> DbErrorResult<Self> {
        Ok(User {
            id: parse_uuid(&r.id, "users.id")?,
            email: r.email,
            password_hash: r.password_hash,
            display_name: r.full_name,
            created_at: parse_timestamp(r.created_at, "users.created_at")?,
        })
    }
}

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new identity.
    ///
    /// The UNIQUE email index is the uniqueness check: the insert is a single
    /// write statement, so racing registrations queue on the write lock and
    /// exactly one of them lands. The rest report `DuplicateEmail`.
    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO users (id, email, password_hash, full_name, created_at)
              VALUES (?, ?, ?, ?, ?)
              "#,
        )
        .bind(user.id.to_string())
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.display_name)
        .bind(user.created_at.timestamp())
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => DbError::DuplicateEmail {
                email: user.email.clone(),
                location: ErrorLocation::from(Location::caller()),
            },
            other => DbError::from(other),
        })?;

        Ok(())
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
              SELECT id, email, password_hash, full_name, created_at
              FROM users
              WHERE email = ?
              "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
              SELECT id, email, password_hash, full_name, created_at
              FROM users
              WHERE id = ?
              "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }
}
