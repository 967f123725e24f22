//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes. Internal details are logged and
//! never returned to the client.

use px_auth::AuthError;
use px_core::FieldError;
use px_db::DbError;
use px_session::SessionError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "INVALID_TOKEN", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Every failed rule, when more than one field was checked
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<FieldError>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request failed field validation (400)
    #[error("Validation failed: {} {location}", summarize(.errors))]
    Validation {
        errors: Vec<FieldError>,
        location: ErrorLocation,
    },

    /// Body could not be parsed (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Missing or rejected credentials (401)
    #[error("Unauthorized ({code}): {message} {location}")]
    Unauthorized {
        code: &'static str,
        message: &'static str,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Identity already exists (409)
    #[error("Conflict ({code}): {message} {location}")]
    Conflict {
        code: &'static str,
        message: &'static str,
        location: ErrorLocation,
    },

    /// Handler exceeded its deadline (503)
    #[error("Request timed out after {timeout_secs}s {location}")]
    Timeout {
        timeout_secs: u64,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl ApiError {
    /// Turn a validation result into an error when any rule failed
    #[track_caller]
    pub fn check(errors: Vec<FieldError>) -> Result<()> {
        if errors.is_empty() {
            return Ok(());
        }

        Err(ApiError::Validation {
            errors,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Timeout { .. } => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Log the error with location for debugging
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let body = match self {
            ApiError::Validation { mut errors, .. } => {
                let first = errors.first().cloned();
                // a single failure is fully described by field + message
                let details = if errors.len() > 1 {
                    std::mem::take(&mut errors)
                } else {
                    Vec::new()
                };
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message: first
                        .as_ref()
                        .map(|e| e.message.clone())
                        .unwrap_or_else(|| "Request validation failed".into()),
                    field: first.map(|e| e.field.to_string()),
                    details,
                }
            }
            ApiError::BadRequest { message, .. } => ApiErrorBody {
                code: "BAD_REQUEST".into(),
                message,
                field: None,
                details: Vec::new(),
            },
            ApiError::Unauthorized { code, message, .. } => ApiErrorBody {
                code: code.into(),
                message: message.into(),
                field: None,
                details: Vec::new(),
            },
            ApiError::NotFound { message, .. } => ApiErrorBody {
                code: "NOT_FOUND".into(),
                message,
                field: None,
                details: Vec::new(),
            },
            ApiError::Conflict { code, message, .. } => ApiErrorBody {
                code: code.into(),
                message: message.into(),
                field: None,
                details: Vec::new(),
            },
            ApiError::Timeout { .. } => ApiErrorBody {
                code: "TIMEOUT".into(),
                message: "Request timed out. Please try again.".into(),
                field: None,
                details: Vec::new(),
            },
            ApiError::Internal { .. } => ApiErrorBody {
                code: "INTERNAL_ERROR".into(),
                message: "Internal server error".into(),
                field: None,
                details: Vec::new(),
            },
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Session failures keep their classification across the HTTP boundary
impl From<SessionError> for ApiError {
    #[track_caller]
    fn from(e: SessionError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        let code = e.error_code();
        let message = e.client_message();

        match e {
            SessionError::DuplicateIdentity { .. } => ApiError::Conflict {
                code,
                message,
                location,
            },
            SessionError::InvalidCredentials { .. } | SessionError::InvalidToken { .. } => {
                ApiError::Unauthorized {
                    code,
                    message,
                    location,
                }
            }
            SessionError::Internal { message, .. } => ApiError::Internal { message, location },
        }
    }
}

/// Header-level authentication failures from the extractor
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        let code = e.error_code();

        match e {
            AuthError::MissingHeader { .. } => ApiError::Unauthorized {
                code,
                message: "Missing Authorization header",
                location,
            },
            AuthError::InvalidScheme { .. } => ApiError::Unauthorized {
                code,
                message: "Expected a Bearer token",
                location,
            },
            other if other.is_unauthorized() => ApiError::Unauthorized {
                code: "INVALID_TOKEN",
                message: "Invalid or expired token",
                location,
            },
            other => ApiError::Internal {
                message: other.to_string(),
                location,
            },
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        ApiError::Internal {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Malformed or non-JSON bodies
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest {
            message: rejection.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
