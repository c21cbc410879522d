use crate::Result as DbErrorResult;

use chrono::Utc;
use sqlx::SqlitePool;

/// Named usage counters, e.g. CSV downloads
pub struct DownloadCounterRepository {
    pool: SqlitePool,
}

impl DownloadCounterRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Increment a counter, creating it at 1, and return the new value
    pub async fn increment(&self, name: &str) -> DbErrorResult<i64> {
        let now = Utc::now().timestamp();

        let count: i64 = sqlx::query_scalar(
            r#"
              INSERT INTO download_counters (name, count, updated_at)
              VALUES (?, 1, ?)
              ON CONFLICT(name) DO UPDATE SET
                  count = count + 1,
                  updated_at = excluded.updated_at
              RETURNING count
              "#,
        )
        .bind(name)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    /// Current value; an unknown counter reads as 0
    pub async fn get(&self, name: &str) -> DbErrorResult<i64> {
        let count: Option<i64> =
            sqlx::query_scalar("SELECT count FROM download_counters WHERE name = ?")
                .bind(name)
                .fetch_optional(&self.pool)
                .await?;

        Ok(count.unwrap_or(0))
    }
}
