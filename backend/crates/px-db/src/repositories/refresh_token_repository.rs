use crate::{DbError, RefreshTokenStore, Result as DbErrorResult};

use px_core::RefreshToken;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const TABLE: &str = "refresh_tokens";

pub struct RefreshTokenRepository {
    pool: SqlitePool,
}

impl RefreshTokenRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RefreshTokenStore for RefreshTokenRepository {
    async fn create(&self, mut record: RefreshToken) -> DbErrorResult<RefreshToken> {
        if record.id.is_nil() {
            record.id = Uuid::new_v4();
        }

        let id = record.id.to_string();
        let user_id = record.user_id.to_string();

        sqlx::query(
            r#"
              INSERT INTO refresh_tokens (id, user_id, token, expires_at, created_at)
              VALUES (?, ?, ?, ?, ?)
              "#,
        )
        .bind(&id)
        .bind(&user_id)
        .bind(&record.token)
        .bind(record.expires_at.timestamp())
        .bind(record.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(record)
    }

    async fn find_valid(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> DbErrorResult<Option<RefreshToken>> {
        let row = sqlx::query(
            r#"
              SELECT id, user_id, token, expires_at, created_at
              FROM refresh_tokens
              WHERE token = ? AND expires_at > ?
              "#,
        )
        .bind(token)
        .bind(now.timestamp())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(refresh_token_from_row).transpose()
    }

    async fn consume_valid(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> DbErrorResult<Option<RefreshToken>> {
        // single statement, so two racing callers cannot both see the row
        let row = sqlx::query(
            r#"
              DELETE FROM refresh_tokens
              WHERE token = ? AND expires_at > ?
              RETURNING id, user_id, token, expires_at, created_at
              "#,
        )
        .bind(token)
        .bind(now.timestamp())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(refresh_token_from_row).transpose()
    }

    async fn delete_by_id(&self, id: Uuid) -> DbErrorResult<()> {
        let id_str = id.to_string();

        sqlx::query("DELETE FROM refresh_tokens WHERE id = ?")
            .bind(&id_str)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete_by_token(&self, token: &str) -> DbErrorResult<()> {
        sqlx::query("DELETE FROM refresh_tokens WHERE token = ?")
            .bind(token)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn sweep_expired(&self, now: DateTime<Utc>) -> DbErrorResult<u64> {
        let result = sqlx::query("DELETE FROM refresh_tokens WHERE expires_at <= ?")
            .bind(now.timestamp())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

fn refresh_token_from_row(row: &SqliteRow) -> DbErrorResult<RefreshToken> {
    let id: String = row.try_get("id")?;
    let user_id: String = row.try_get("user_id")?;
    let expires_at: i64 = row.try_get("expires_at")?;
    let created_at: i64 = row.try_get("created_at")?;

    Ok(RefreshToken {
        id: parse_uuid(&id, "id")?,
        user_id: parse_uuid(&user_id, "user_id")?,
        token: row.try_get("token")?,
        expires_at: timestamp(expires_at, "expires_at")?,
        created_at: timestamp(created_at, "created_at")?,
    })
}

fn parse_uuid(value: &str, column: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| DbError::corrupt(TABLE, format!("{}: {}", column, e)))
}

fn timestamp(secs: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| DbError::corrupt(TABLE, format!("{}: out of range", column)))
}
