use crate::{ApiError, ApiResult};

use std::future::Future;
use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;

/// Run a handler body under the configured deadline.
///
/// On expiry the inner future is dropped, which abandons any outstanding
/// store or signing work, and the caller gets `TIMEOUT`.
#[track_caller]
pub fn with_deadline<T, F>(
    timeout: Duration,
    operation: &'static str,
    fut: F,
) -> impl Future<Output = ApiResult<T>>
where
    F: Future<Output = ApiResult<T>>,
{
    let location = ErrorLocation::from(Location::caller());

    async move {
        match tokio::time::timeout(timeout, fut).await {
            Ok(result) => result,
            Err(_elapsed) => {
                log::error!(
                    "Handler {} timed out after {}ms",
                    operation,
                    timeout.as_millis()
                );
                Err(ApiError::Timeout {
                    timeout_secs: timeout.as_secs(),
                    location,
                })
            }
        }
    }
}
