use crate::{AuthError, Claims, Result as AuthErrorResult, TokenKind};

use px_core::{ErrorLocation, UserRole};

use std::panic::Location;

use uuid::Uuid;

/// Authenticated caller available to handlers.
/// This is the validated, trusted identity after access token verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
}

impl Principal {
    /// Only access tokens authenticate requests
    #[track_caller]
    pub fn from_claims(claims: Claims) -> AuthErrorResult<Self> {
        if claims.kind != TokenKind::Access {
            return Err(AuthError::InvalidToken {
                message: "refresh token cannot authenticate a request".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            user_id: claims.user_id,
            email: claims.email,
            first_name: claims.first_name,
            last_name: claims.last_name,
            role: claims.role,
        })
    }
}
