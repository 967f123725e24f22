use std::path::Path;

use sqlx::SqlitePool;
use uuid::Uuid;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    px_db::connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// File-backed pool with several connections, for tests that need real concurrency
#[allow(dead_code)]
pub async fn create_file_pool(dir: &Path) -> SqlitePool {
    px_db::connect(&dir.join("px-test.db"), 5)
        .await
        .expect("Failed to create file pool")
}

/// Number of refresh records stored for `user_id`, expired or not
#[allow(dead_code)]
pub async fn count_refresh_tokens(pool: &SqlitePool, user_id: Uuid) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM refresh_tokens WHERE user_id = ?")
        .bind(user_id.to_string())
        .fetch_one(pool)
        .await
        .expect("Failed to count refresh tokens")
}
