//! Storage seams the session layer is written against.
//!
//! The SQLite repositories are the production implementations; tests may
//! substitute their own.

use crate::Result as DbErrorResult;

use px_core::{RefreshToken, User};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Insert a new identity. A taken email fails with `DbError::DuplicateIdentity`.
    async fn create(&self, user: &User) -> DbErrorResult<()>;

    async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>>;

    async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>>;

    /// Change first and/or last name. Returns false when no identity has `id`.
    async fn update_names(
        &self,
        id: Uuid,
        first_name: Option<&str>,
        last_name: Option<&str>,
        updated_at: DateTime<Utc>,
    ) -> DbErrorResult<bool>;

    /// Remove an identity and, through the foreign key, its refresh records
    async fn delete(&self, id: Uuid) -> DbErrorResult<bool>;
}

#[async_trait]
pub trait RefreshTokenStore: Send + Sync {
    /// Persist a record. A nil id is replaced with a fresh one.
    async fn create(&self, record: RefreshToken) -> DbErrorResult<RefreshToken>;

    /// Only records with `expires_at` strictly after `now`
    async fn find_valid(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> DbErrorResult<Option<RefreshToken>>;

    /// Atomically remove and return a still-valid record.
    /// Of several concurrent callers with the same token, at most one gets `Some`.
    async fn consume_valid(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> DbErrorResult<Option<RefreshToken>>;

    async fn delete_by_id(&self, id: Uuid) -> DbErrorResult<()>;

    async fn delete_by_token(&self, token: &str) -> DbErrorResult<()>;

    /// Delete every record whose `expires_at` is at or before `now`
    async fn sweep_expired(&self, now: DateTime<Utc>) -> DbErrorResult<u64>;
}
