use crate::ShutdownCoordinator;

use px_session::SessionService;

use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    /// Kept for readiness probes
    pub pool: SqlitePool,
    pub sessions: Arc<SessionService>,
    /// Per-request deadline
    pub handler_timeout: Duration,
    pub shutdown: ShutdownCoordinator,
}
