pub mod dto;
pub mod error;
pub mod session_service;
pub mod sweeper;

pub use dto::auth_response::AuthResponse;
pub use dto::login_request::LoginRequest;
pub use dto::register_request::RegisterRequest;
pub use error::{Result, SessionError};
pub use session_service::SessionService;
pub use sweeper::spawn_sweeper;

#[cfg(test)]
mod tests;
