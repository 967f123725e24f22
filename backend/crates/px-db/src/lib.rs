pub mod connection;
pub mod error;
pub mod repositories;
pub mod stores;

pub use connection::database::{connect, connect_in_memory, run_migrations};
pub use error::{DbError, Result};
pub use repositories::refresh_token_repository::RefreshTokenRepository;
pub use repositories::user_repository::UserRepository;
pub use stores::{IdentityStore, RefreshTokenStore};
