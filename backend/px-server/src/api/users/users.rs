//! Profile handlers for the authenticated caller

use crate::{
    ApiError, ApiResult, AppState, AuthenticatedUser, MeResponse, UpdateNamesRequest,
    with_deadline,
};

use px_core::{UserSummary, validate_update_names};

use std::panic::Location;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use chrono::Utc;
use error_location::ErrorLocation;

/// GET /api/v1/users/me
///
/// Answers from the token alone; no store lookup.
pub async fn get_me(AuthenticatedUser(principal): AuthenticatedUser) -> Json<MeResponse> {
    Json(MeResponse::from(principal))
}

/// PATCH /api/v1/users/me
///
/// Tokens already issued keep the old names until they expire.
pub async fn update_me(
    State(state): State<AppState>,
    AuthenticatedUser(principal): AuthenticatedUser,
    payload: Result<Json<UpdateNamesRequest>, JsonRejection>,
) -> ApiResult<Json<UserSummary>> {
    let Json(request) = payload?;

    ApiError::check(validate_update_names(
        request.first_name.as_deref(),
        request.last_name.as_deref(),
    ))?;

    with_deadline(state.handler_timeout, "update_me", async {
        let identities = state.sessions.identities();

        let updated = identities
            .update_names(
                principal.user_id,
                request.first_name.as_deref(),
                request.last_name.as_deref(),
                Utc::now(),
            )
            .await?;

        let user = if updated {
            identities.find_by_id(principal.user_id).await?
        } else {
            None
        };

        let user = user.ok_or_else(|| ApiError::NotFound {
            message: format!("Identity {} not found", principal.user_id),
            location: ErrorLocation::from(Location::caller()),
        })?;

        log::info!("Identity {} updated its names", user.id);
        Ok(Json(UserSummary::from(user)))
    })
    .await
}
