//! Session REST API handlers
//!
//! Each handler validates its body once, then hands off to the session
//! service under the per-request deadline.

use crate::{ApiError, ApiResult, AppState, RefreshTokenRequest, with_deadline};

use px_core::{validate_login, validate_refresh_token, validate_register};
use px_session::{AuthResponse, LoginRequest, RegisterRequest};

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/v1/auth/register
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let Json(request) = payload?;

    ApiError::check(validate_register(
        &request.first_name,
        &request.last_name,
        &request.email,
        &request.password,
        request.role.as_deref(),
    ))?;

    with_deadline(state.handler_timeout, "register", async {
        let response = state.sessions.register(request).await?;
        Ok((StatusCode::CREATED, Json(response)))
    })
    .await
}

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<AuthResponse>> {
    let Json(request) = payload?;

    ApiError::check(validate_login(&request.email, &request.password))?;

    with_deadline(state.handler_timeout, "login", async {
        Ok(Json(state.sessions.login(request).await?))
    })
    .await
}

/// POST /api/v1/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    payload: Result<Json<RefreshTokenRequest>, JsonRejection>,
) -> ApiResult<Json<AuthResponse>> {
    let Json(request) = payload?;

    ApiError::check(validate_refresh_token(&request.refresh_token))?;

    with_deadline(state.handler_timeout, "refresh", async {
        Ok(Json(state.sessions.refresh(&request.refresh_token).await?))
    })
    .await
}

/// POST /api/v1/auth/logout
///
/// Always 204 for a well-formed body, whether or not the token was known.
pub async fn logout(
    State(state): State<AppState>,
    payload: Result<Json<RefreshTokenRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Json(request) = payload?;

    ApiError::check(validate_refresh_token(&request.refresh_token))?;

    with_deadline(state.handler_timeout, "logout", async {
        state.sessions.logout(&request.refresh_token).await?;
        Ok(StatusCode::NO_CONTENT)
    })
    .await
}
