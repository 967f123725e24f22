use crate::ApiError;

use px_auth::AuthError;
use px_core::FieldError;
use px_session::SessionError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Identity not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Identity not found");
}

#[tokio::test]
async fn test_single_validation_error_returns_field_without_details() {
    let error = ApiError::check(vec![FieldError::new("email", "must be provided")]).unwrap_err();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "email");
    assert_eq!(json["error"]["message"], "must be provided");
    assert!(json["error"].get("details").is_none());
}

#[tokio::test]
async fn test_multiple_validation_errors_are_listed_in_details() {
    let error = ApiError::check(vec![
        FieldError::new("first_name", "must be provided"),
        FieldError::new("password", "must be at least 8 bytes long"),
    ])
    .unwrap_err();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["field"], "first_name");
    let details = json["error"]["details"].as_array().unwrap();
    assert_eq!(details.len(), 2);
    assert_eq!(details[1]["field"], "password");
}

#[test]
fn test_check_passes_when_no_rule_failed() {
    assert!(ApiError::check(Vec::new()).is_ok());
}

#[tokio::test]
async fn test_internal_error_hides_details() {
    let error = ApiError::Internal {
        message: "database file is locked at /var/lib/px/identity.db".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"]["message"], "Internal server error");
}

#[tokio::test]
async fn test_timeout_returns_503() {
    let error = ApiError::Timeout {
        timeout_secs: 30,
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["error"]["code"], "TIMEOUT");
}

#[tokio::test]
async fn test_duplicate_identity_maps_to_409() {
    let error = ApiError::from(SessionError::DuplicateIdentity {
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "DUPLICATE_IDENTITY");
}

#[tokio::test]
async fn test_invalid_credentials_and_token_map_to_401() {
    let (status, json) = body_json(ApiError::from(SessionError::invalid_credentials())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "INVALID_CREDENTIALS");

    let (status, json) = body_json(ApiError::from(SessionError::invalid_token())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "INVALID_TOKEN");
}

#[tokio::test]
async fn test_session_internal_maps_to_500_without_message() {
    let error = ApiError::from(SessionError::Internal {
        message: "join error".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["message"], "Internal server error");
}

#[tokio::test]
async fn test_missing_header_keeps_its_code() {
    let error = ApiError::from(AuthError::MissingHeader {
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "MISSING_AUTH_HEADER");
}

#[tokio::test]
async fn test_password_hash_failure_is_internal() {
    let error = ApiError::from(AuthError::PasswordHash {
        message: "salt".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, _) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
