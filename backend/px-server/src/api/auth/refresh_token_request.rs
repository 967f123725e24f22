use serde::Deserialize;

/// Body for refresh and logout
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}
