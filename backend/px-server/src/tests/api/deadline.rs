use crate::{ApiError, with_deadline};

use std::time::Duration;

#[tokio::test]
async fn test_completes_within_deadline() {
    let result = with_deadline(Duration::from_secs(1), "fast", async { Ok(42) }).await;

    assert_eq!(result.unwrap(), 42);
}

#[tokio::test]
async fn test_elapsed_deadline_returns_timeout() {
    let result: crate::ApiResult<()> =
        with_deadline(Duration::from_millis(20), "slow", async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        })
        .await;

    assert!(matches!(result, Err(ApiError::Timeout { .. })));
}

#[tokio::test]
async fn test_inner_error_passes_through() {
    let result: crate::ApiResult<()> = with_deadline(Duration::from_secs(1), "failing", async {
        Err(ApiError::from(px_session::SessionError::invalid_credentials()))
    })
    .await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}
