use px_auth::Principal;
use px_core::UserRole;

use serde::Serialize;
use uuid::Uuid;

/// The caller as seen through their access token
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user_id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
}

impl From<Principal> for MeResponse {
    fn from(principal: Principal) -> Self {
        Self {
            user_id: principal.user_id,
            email: principal.email,
            first_name: principal.first_name,
            last_name: principal.last_name,
            role: principal.role,
        }
    }
}
