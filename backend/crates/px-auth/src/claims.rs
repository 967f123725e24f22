use crate::{AuthError, Result as AuthErrorResult, TokenKind};

use px_core::{User, UserRole};

use std::panic::Location;

use chrono::{DateTime, Duration, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Signed token payload.
///
/// Built from the identity at issuance time and never refreshed from the
/// store afterwards, so an unexpired token reflects the identity as it was
/// when the token was minted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: UserRole,
    pub user_id: Uuid,
    /// Access or refresh
    #[serde(rename = "typ")]
    pub kind: TokenKind,
    /// Unique token id, keeps two tokens minted in the same second distinct
    pub jti: Uuid,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    /// Expiration timestamp (Unix)
    pub exp: i64,
}

impl Claims {
    pub fn for_user(
        user: &User,
        kind: TokenKind,
        issued_at: DateTime<Utc>,
        lifetime: Duration,
    ) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            role: user.role,
            user_id: user.id,
            kind,
            jti: Uuid::new_v4(),
            iat: issued_at.timestamp(),
            exp: (issued_at + lifetime).timestamp(),
        }
    }

    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.user_id.is_nil() {
            return Err(AuthError::InvalidClaim {
                claim: "user_id".to_string(),
                message: "user_id cannot be nil".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.email.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "email".to_string(),
                message: "email cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.exp <= self.iat {
            return Err(AuthError::InvalidClaim {
                claim: "exp".to_string(),
                message: "exp must be after iat".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
