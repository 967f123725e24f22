mod sweeper;

use crate::{RegisterRequest, SessionService};

use px_auth::TokenIssuer;
use px_core::Genre;
use px_db::{RefreshTokenRepository, UserRepository};

use std::sync::Arc;

use chrono::Duration;
use sqlx::SqlitePool;
use uuid::Uuid;

pub(crate) const SECRET: &[u8] = b"session-test-secret-at-least-32-bytes";

pub(crate) fn issuer() -> Arc<TokenIssuer> {
    Arc::new(TokenIssuer::with_hs256(
        SECRET,
        Duration::minutes(15),
        Duration::days(7),
    ))
}

pub(crate) async fn test_pool() -> SqlitePool {
    px_db::connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// Number of refresh records stored for `user_id`, expired or not
pub(crate) async fn count_refresh_tokens(pool: &SqlitePool, user_id: Uuid) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM refresh_tokens WHERE user_id = ?")
        .bind(user_id.to_string())
        .fetch_one(pool)
        .await
        .expect("Failed to count refresh tokens")
}

pub(crate) fn service_on(pool: &SqlitePool) -> SessionService {
    SessionService::new(
        Arc::new(UserRepository::new(pool.clone())),
        Arc::new(RefreshTokenRepository::new(pool.clone())),
        issuer(),
    )
}

pub(crate) fn register_request(email: &str, password: &str) -> RegisterRequest {
    RegisterRequest {
        first_name: "Alan".to_string(),
        last_name: "Turing".to_string(),
        email: email.to_string(),
        password: password.to_string(),
        role: None,
        favorite_genres: vec![Genre::new(9, "Mystery")],
    }
}
