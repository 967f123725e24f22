use crate::tests::{issuer, sample_user, test_state};
use crate::{ApiError, AuthenticatedUser};

use axum::{body::Body, extract::FromRequestParts, http::Request, http::request::Parts};

fn parts_with_header(value: Option<&str>) -> Parts {
    let mut builder = Request::builder().uri("/api/v1/users/me");
    if let Some(value) = value {
        builder = builder.header("Authorization", value);
    }
    builder.body(Body::empty()).unwrap().into_parts().0
}

#[tokio::test]
async fn test_valid_bearer_token_yields_principal() {
    let state = test_state().await;
    let user = sample_user();
    let pair = issuer().issue_pair(&user).unwrap();
    let mut parts = parts_with_header(Some(&format!("Bearer {}", pair.access_token)));

    let AuthenticatedUser(principal) = AuthenticatedUser::from_request_parts(&mut parts, &state)
        .await
        .unwrap();

    assert_eq!(principal.user_id, user.id);
    assert_eq!(principal.email, "grace@example.com");
}

#[tokio::test]
async fn test_missing_header_is_rejected() {
    let state = test_state().await;
    let mut parts = parts_with_header(None);

    let result = AuthenticatedUser::from_request_parts(&mut parts, &state).await;

    assert!(matches!(
        result,
        Err(ApiError::Unauthorized {
            code: "MISSING_AUTH_HEADER",
            ..
        })
    ));
}

#[tokio::test]
async fn test_non_bearer_scheme_is_rejected() {
    let state = test_state().await;
    let mut parts = parts_with_header(Some("Basic Z3JhY2U6aG9wcGVy"));

    let result = AuthenticatedUser::from_request_parts(&mut parts, &state).await;

    assert!(matches!(
        result,
        Err(ApiError::Unauthorized {
            code: "INVALID_AUTH_SCHEME",
            ..
        })
    ));
}

#[tokio::test]
async fn test_refresh_token_is_not_accepted_as_bearer() {
    let state = test_state().await;
    let pair = issuer().issue_pair(&sample_user()).unwrap();
    let mut parts = parts_with_header(Some(&format!("Bearer {}", pair.refresh_token)));

    let result = AuthenticatedUser::from_request_parts(&mut parts, &state).await;

    assert!(matches!(
        result,
        Err(ApiError::Unauthorized {
            code: "INVALID_TOKEN",
            ..
        })
    ));
}
