pub mod genre;
pub mod refresh_token;
pub mod user;
pub mod user_role;
pub mod user_summary;
