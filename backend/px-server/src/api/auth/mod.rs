#[allow(clippy::module_inception)]
pub mod auth;
pub mod refresh_token_request;
