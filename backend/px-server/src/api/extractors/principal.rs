//! Axum extractor for bearer-token authentication

use crate::{ApiError, AppState};

use px_auth::{AuthError, Principal};
use px_core::ErrorLocation;

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};

const BEARER_PREFIX: &str = "Bearer ";

/// The verified caller, built once per request from the access token
pub struct AuthenticatedUser(pub Principal);

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|h| h.to_str().ok())
                .ok_or_else(|| AuthError::MissingHeader {
                    location: ErrorLocation::from(Location::caller()),
                })?;

            let token = header
                .strip_prefix(BEARER_PREFIX)
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .ok_or_else(|| AuthError::InvalidScheme {
                    location: ErrorLocation::from(Location::caller()),
                })?;

            let principal = state.sessions.authenticate(token)?;
            log::debug!("Authenticated identity {}", principal.user_id);

            Ok(AuthenticatedUser(principal))
        }
    }
}
