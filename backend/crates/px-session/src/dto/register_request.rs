use px_core::Genre;

use serde::Deserialize;

/// Missing fields deserialize empty and are caught by validation
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    /// Validated when present, never honoured: registrations are always `user`
    pub role: Option<String>,
    pub favorite_genres: Vec<Genre>,
}
