//! Read access to the three status change collections.
//!
//! Each source repository has its own table with an identical layout, so
//! every query is parameterized by [`Repo`] and the table name is chosen
//! from a fixed set.

use crate::{DbError, Result as DbErrorResult};

use ei_core::{Repo, StatusChange};

use chrono::DateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct StatusChangeRepository {
    pool: SqlitePool,
}

impl StatusChangeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All records of one collection, oldest change first
    pub async fn find_all(&self, repo: Repo) -> DbErrorResult<Vec<StatusChange>> {
        let sql = format!(
            r#"
                SELECT eip, from_status, to_status, change_date,
                    changed_day, changed_month, changed_year,
                    eip_title, eip_category
                FROM {}
                ORDER BY change_date ASC, id ASC
            "#,
            table_name(repo)
        );

        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        log::debug!("Loaded {} status changes from {}", rows.len(), repo);

        rows.iter().map(status_change_from_row).collect()
    }

    /// Insert one record. Used by ingestion tooling and tests.
    pub async fn insert(&self, repo: Repo, change: &StatusChange) -> DbErrorResult<()> {
        let sql = format!(
            r#"
                INSERT INTO {} (
                    eip, from_status, to_status, change_date,
                    changed_day, changed_month, changed_year,
                    eip_title, eip_category
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
            table_name(repo)
        );

        sqlx::query(&sql)
            .bind(&change.eip)
            .bind(&change.from_status)
            .bind(&change.to_status)
            .bind(change.change_date.timestamp())
            .bind(change.changed_day as i64)
            .bind(change.changed_month as i64)
            .bind(change.changed_year as i64)
            .bind(&change.eip_title)
            .bind(&change.eip_category)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn count(&self, repo: Repo) -> DbErrorResult<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", table_name(repo));
        let count: i64 = sqlx::query_scalar(&sql).fetch_one(&self.pool).await?;
        Ok(count)
    }
}

fn table_name(repo: Repo) -> &'static str {
    match repo {
        Repo::Eip => "eip_status_changes",
        Repo::Erc => "erc_status_changes",
        Repo::Rip => "rip_status_changes",
    }
}

fn status_change_from_row(row: &SqliteRow) -> DbErrorResult<StatusChange> {
    let change_date: i64 = row.try_get("change_date")?;

    Ok(StatusChange {
        eip: row.try_get("eip")?,
        from_status: row.try_get("from_status")?,
        to_status: row.try_get("to_status")?,
        change_date: DateTime::from_timestamp(change_date, 0).ok_or_else(|| {
            DbError::invalid_row(format!("Invalid timestamp in change_date: {}", change_date))
        })?,
        changed_day: to_u32(row.try_get("changed_day")?, "changed_day")?,
        changed_month: to_u32(row.try_get("changed_month")?, "changed_month")?,
        changed_year: i32::try_from(row.try_get::<i64, _>("changed_year")?)
            .map_err(|e| DbError::invalid_row(format!("Invalid changed_year: {}", e)))?,
        eip_title: row.try_get("eip_title")?,
        eip_category: row.try_get("eip_category")?,
    })
}

fn to_u32(value: i64, column: &str) -> DbErrorResult<u32> {
    u32::try_from(value).map_err(|e| DbError::invalid_row(format!("Invalid {}: {}", column, e)))
}
