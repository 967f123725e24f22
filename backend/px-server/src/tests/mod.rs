mod api;

use crate::{AppState, ShutdownCoordinator};

use px_auth::TokenIssuer;
use px_core::{Genre, User, UserRole};
use px_db::{RefreshTokenRepository, UserRepository};
use px_session::SessionService;

use std::sync::Arc;
use std::time::Duration;

pub(crate) const SECRET: &[u8] = b"server-unit-test-secret-32-bytes-long";

pub(crate) fn issuer() -> Arc<TokenIssuer> {
    Arc::new(TokenIssuer::with_hs256(
        SECRET,
        chrono::Duration::minutes(15),
        chrono::Duration::days(7),
    ))
}

pub(crate) async fn test_state() -> AppState {
    let pool = px_db::connect_in_memory()
        .await
        .expect("Failed to create test pool");

    let sessions = SessionService::new(
        Arc::new(UserRepository::new(pool.clone())),
        Arc::new(RefreshTokenRepository::new(pool.clone())),
        issuer(),
    );

    AppState {
        pool,
        sessions: Arc::new(sessions),
        handler_timeout: Duration::from_secs(5),
        shutdown: ShutdownCoordinator::new(),
    }
}

pub(crate) fn sample_user() -> User {
    User::new(
        "Grace".to_string(),
        "Hopper".to_string(),
        "grace@example.com".to_string(),
        "not-a-real-hash".to_string(),
        UserRole::User,
        vec![Genre::new(3, "Science Fiction")],
    )
}
