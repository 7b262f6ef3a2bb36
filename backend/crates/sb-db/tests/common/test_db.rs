use sb_db::Database;

use sqlx::SqlitePool;
use uuid::Uuid;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    Database::in_memory()
        .await
        .expect("Failed to create test pool")
}

/// Inserts a stub user for foreign key constraints
pub async fn create_test_user(pool: &SqlitePool, user_id: Uuid) {
    // Use sqlx::query directly so fixtures don't depend on the repository under test
    sqlx::query(
        "INSERT INTO users (id, email, password_hash, created_at) VALUES (?, ?, 'x', strftime('%s','now'))",
    )
    .bind(user_id.to_string())
    .bind(format!("test-{}@example.com", user_id))
    .execute(pool)
    .await
    .expect("Failed to create test user");
}

/// Count rows matching a single-column filter
pub async fn count_rows(pool: &SqlitePool, table: &str, column: &str, value: &str) -> i64 {
    sqlx::query_scalar(&format!(
        "SELECT COUNT(*) FROM {} WHERE {} = ?",
        table, column
    ))
    .bind(value)
    .fetch_one(pool)
    .await
    .expect("Failed to count rows")
}
