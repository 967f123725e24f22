use serde::{Deserialize, Serialize};

/// Favorite-genre reference. The catalog owns genres; identities keep a copy by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub genre_id: i32,
    pub genre_name: String,
}

impl Genre {
    pub fn new(genre_id: i32, genre_name: impl Into<String>) -> Self {
        Self {
            genre_id,
            genre_name: genre_name.into(),
        }
    }
}
