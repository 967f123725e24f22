#![allow(dead_code)]

//! Test infrastructure for px-server API tests

use px_auth::TokenIssuer;
use px_db::{RefreshTokenRepository, UserRepository};
use px_server::{AppState, ShutdownCoordinator};
use px_session::SessionService;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

pub const TEST_SECRET: &[u8] = b"integration-test-secret-32-bytes-xx";
pub const PASSWORD: &str = "correct-horse-battery";

/// Create AppState over a fresh in-memory database
pub async fn create_test_app_state() -> AppState {
    let pool = px_db::connect_in_memory()
        .await
        .expect("Failed to create test database");

    let issuer = Arc::new(TokenIssuer::with_hs256(
        TEST_SECRET,
        chrono::Duration::minutes(15),
        chrono::Duration::days(7),
    ));

    let sessions = SessionService::new(
        Arc::new(UserRepository::new(pool.clone())),
        Arc::new(RefreshTokenRepository::new(pool.clone())),
        issuer,
    );

    AppState {
        pool,
        sessions: Arc::new(sessions),
        handler_timeout: Duration::from_secs(10),
        shutdown: ShutdownCoordinator::new(),
    }
}

/// Send a request and decode the JSON body (Null for empty bodies)
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    bearer: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = bearer {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };

    (status, json)
}

pub fn register_body(email: &str) -> Value {
    json!({
        "first_name": "Ada",
        "last_name": "Lovelace",
        "email": email,
        "password": PASSWORD,
        "favorite_genres": [{ "genre_id": 5, "genre_name": "Drama" }]
    })
}

/// Register an identity and return the response body
pub async fn register(app: &Router, email: &str) -> Value {
    let (status, json) = send(
        app,
        "POST",
        "/api/v1/auth/register",
        None,
        Some(register_body(email)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {json}");
    json
}
