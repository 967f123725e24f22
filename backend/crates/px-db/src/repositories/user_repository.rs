use crate::{DbError, IdentityStore, Result as DbErrorResult};

use px_core::{Genre, User, UserRole};

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const TABLE: &str = "users";

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdentityStore for UserRepository {
    async fn create(&self, user: &User) -> DbErrorResult<()> {
        let id = user.id.to_string();
        let favorite_genres = serde_json::to_string(&user.favorite_genres)
            .map_err(|e| DbError::corrupt(TABLE, format!("favorite_genres: {}", e)))?;
        let created_at = user.created_at.timestamp();
        let updated_at = user.updated_at.timestamp();

        sqlx::query(
            r#"
              INSERT INTO users (
                  id, first_name, last_name, email, password_hash,
                  role, favorite_genres, created_at, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(&id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(&favorite_genres)
        .bind(created_at)
        .bind(updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| DbError::from_identity_insert(e, &user.email))?;

        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(
            r#"
              SELECT id, first_name, last_name, email, password_hash,
                     role, favorite_genres, created_at, updated_at
              FROM users
              WHERE email = ?
              "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(user_from_row).transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let id_str = id.to_string();

        let row = sqlx::query(
            r#"
              SELECT id, first_name, last_name, email, password_hash,
                     role, favorite_genres, created_at, updated_at
              FROM users
              WHERE id = ?
              "#,
        )
        .bind(&id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(user_from_row).transpose()
    }

    async fn update_names(
        &self,
        id: Uuid,
        first_name: Option<&str>,
        last_name: Option<&str>,
        updated_at: DateTime<Utc>,
    ) -> DbErrorResult<bool> {
        let id_str = id.to_string();

        let result = sqlx::query(
            r#"
              UPDATE users
              SET first_name = COALESCE(?, first_name),
                  last_name = COALESCE(?, last_name),
                  updated_at = ?
              WHERE id = ?
              "#,
        )
        .bind(first_name)
        .bind(last_name)
        .bind(updated_at.timestamp())
        .bind(&id_str)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let id_str = id.to_string();

        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(&id_str)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn user_from_row(row: &SqliteRow) -> DbErrorResult<User> {
    let id: String = row.try_get("id")?;
    let role: String = row.try_get("role")?;
    let favorite_genres: String = row.try_get("favorite_genres")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(User {
        id: Uuid::parse_str(&id).map_err(|e| DbError::corrupt(TABLE, format!("id: {}", e)))?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        role: UserRole::from_str(&role).map_err(|e| DbError::corrupt(TABLE, e.to_string()))?,
        favorite_genres: serde_json::from_str::<Vec<Genre>>(&favorite_genres)
            .map_err(|e| DbError::corrupt(TABLE, format!("favorite_genres: {}", e)))?,
        created_at: timestamp(created_at, "created_at")?,
        updated_at: timestamp(updated_at, "updated_at")?,
    })
}

fn timestamp(secs: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| DbError::corrupt(TABLE, format!("{}: out of range", column)))
}
