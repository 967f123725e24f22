use serde::Deserialize;

/// Omitted fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateNamesRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
