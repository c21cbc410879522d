//! User repository: profile reads and the handful of mutations the account
//! page performs (name, password hash, billing state).

use crate::{DbError, Result as DbErrorResult};

use ei_core::{Tier, UserAccount, UserRecord};

use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const USER_COLUMNS: &str = r#"
    id, name, email, image, tier, wallet_address,
    subscription_id, premium_until, created_at, updated_at
"#;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        account: &UserAccount,
        password_hash: Option<&str>,
    ) -> DbErrorResult<()> {
        let record = &account.record;

        sqlx::query(
            r#"
                INSERT INTO users (
                    id, name, email, image, tier, wallet_address, password_hash,
                    subscription_id, premium_until, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.id)
        .bind(&record.name)
        .bind(&record.email)
        .bind(&record.image)
        .bind(record.tier.as_str())
        .bind(&record.wallet_address)
        .bind(password_hash)
        .bind(&account.subscription_id)
        .bind(account.premium_until.map(|dt| dt.timestamp()))
        .bind(account.created_at.timestamp())
        .bind(account.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: &str) -> DbErrorResult<Option<UserAccount>> {
        let sql = format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(account_from_row).transpose()
    }

    /// Emails are matched case-insensitively
    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<UserAccount>> {
        let sql = format!(
            "SELECT {} FROM users WHERE email = ? COLLATE NOCASE",
            USER_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(email.trim())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(account_from_row).transpose()
    }

    /// Rename a user. Returns the updated account, or `None` if the id is
    /// unknown.
    pub async fn update_name(&self, id: &str, name: &str) -> DbErrorResult<Option<UserAccount>> {
        let result = sqlx::query("UPDATE users SET name = ?, updated_at = ? WHERE id = ?")
            .bind(name)
            .bind(Utc::now().timestamp())
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Returns false if the id is unknown
    pub async fn update_password_hash(&self, id: &str, password_hash: &str) -> DbErrorResult<bool> {
        let result = sqlx::query("UPDATE users SET password_hash = ?, updated_at = ? WHERE id = ?")
            .bind(password_hash)
            .bind(Utc::now().timestamp())
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn find_password_hash(&self, id: &str) -> DbErrorResult<Option<String>> {
        let hash: Option<Option<String>> =
            sqlx::query_scalar("SELECT password_hash FROM users WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(hash.flatten())
    }

    /// Set the tier and the subscription backing it
    pub async fn set_subscription(
        &self,
        id: &str,
        tier: Tier,
        subscription_id: Option<&str>,
    ) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
                UPDATE users
                SET tier = ?, subscription_id = ?, premium_until = NULL, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(tier.as_str())
        .bind(subscription_id)
        .bind(Utc::now().timestamp())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Record that the subscription ends at `premium_until`. The tier stays
    /// as-is until the provider reports the subscription as ended.
    pub async fn schedule_cancellation(
        &self,
        id: &str,
        premium_until: DateTime<Utc>,
    ) -> DbErrorResult<bool> {
        let result = sqlx::query("UPDATE users SET premium_until = ?, updated_at = ? WHERE id = ?")
            .bind(premium_until.timestamp())
            .bind(Utc::now().timestamp())
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn account_from_row(row: &SqliteRow) -> DbErrorResult<UserAccount> {
    let tier: String = row.try_get("tier")?;
    let premium_until: Option<i64> = row.try_get("premium_until")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(UserAccount {
        record: UserRecord {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            image: row.try_get("image")?,
            tier: Tier::from_str(&tier)
                .map_err(|e| DbError::invalid_row(format!("Invalid tier in users.tier: {}", e)))?,
            wallet_address: row.try_get("wallet_address")?,
        },
        subscription_id: row.try_get("subscription_id")?,
        premium_until: premium_until
            .map(|ts| {
                DateTime::from_timestamp(ts, 0).ok_or_else(|| {
                    DbError::invalid_row("Invalid timestamp in users.premium_until")
                })
            })
            .transpose()?,
        created_at: DateTime::from_timestamp(created_at, 0)
            .ok_or_else(|| DbError::invalid_row("Invalid timestamp in users.created_at"))?,
        updated_at: DateTime::from_timestamp(updated_at, 0)
            .ok_or_else(|| DbError::invalid_row("Invalid timestamp in users.updated_at"))?,
    })
}
