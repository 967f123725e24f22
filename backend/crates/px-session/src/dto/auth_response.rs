use px_core::UserSummary;

use serde::Serialize;

/// Result of register, login and refresh
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub user: UserSummary,
    pub access_token: String,
    pub refresh_token: String,
}
