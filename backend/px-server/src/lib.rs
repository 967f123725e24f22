pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod shutdown;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{login, logout, refresh, register},
        refresh_token_request::RefreshTokenRequest,
    },
    deadline::with_deadline,
    error::ApiError,
    error::Result as ApiResult,
    extractors::principal::AuthenticatedUser,
    users::{
        me_response::MeResponse,
        update_names_request::UpdateNamesRequest,
        users::{get_me, update_me},
    },
};
pub use app_state::AppState;
pub use routes::build_router;
pub use shutdown::{ShutdownCoordinator, ShutdownGuard};
