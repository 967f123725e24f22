use super::{count_refresh_tokens, register_request, service_on, test_pool};
use crate::spawn_sweeper;

use px_core::RefreshToken;
use px_db::{RefreshTokenRepository, RefreshTokenStore};

use std::sync::Arc;

use chrono::{Duration, Utc};
use tokio::sync::broadcast;

#[tokio::test]
async fn given_expired_records_when_sweeper_runs_then_they_are_removed() {
    // Given: One live session and one long-expired record for the same identity
    let pool = test_pool().await;
    let service = service_on(&pool);
    let session = service
        .register(register_request("sweep@x.com", "Password1!"))
        .await
        .unwrap();
    let store = Arc::new(RefreshTokenRepository::new(pool.clone()));
    store
        .create(RefreshToken::issue(
            session.user.id,
            "expired-token".to_string(),
            Utc::now() - Duration::days(30),
            Duration::days(7),
        ))
        .await
        .unwrap();
    assert_eq!(count_refresh_tokens(&pool, session.user.id).await, 2);

    // When: The sweeper gets a few ticks
    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
    let handle = spawn_sweeper(
        store.clone(),
        std::time::Duration::from_millis(20),
        shutdown_rx,
    );
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;

    // Then: Only the live record remains, and the task stops on shutdown
    assert_eq!(count_refresh_tokens(&pool, session.user.id).await, 1);
    shutdown_tx.send(()).unwrap();
    tokio::time::timeout(std::time::Duration::from_secs(1), handle)
        .await
        .expect("sweeper should stop after shutdown")
        .unwrap();
}
