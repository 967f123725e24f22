use chrono::{DateTime, Utc};

/// Access + refresh token pair minted from one set of claims
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub issued_at: DateTime<Utc>,
}
