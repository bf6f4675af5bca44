//! Shared setup for API-contract tests: an axum router backed by an in-memory
//! database, plus request/response helpers.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;

use modhost::{config::SecurityConfig, router, service::security::TokenService, state::AppState};
use test_utils::builder::TestBuilder;

/// Builds the application router over a fresh in-memory database.
pub async fn setup_app() -> (Router, DatabaseConnection) {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .expect("test database should initialize");
    let db = test.db.expect("database connection should exist");

    let tokens = TokenService::from_config(&SecurityConfig {
        secret: "api-test-secret".to_string(),
        algorithm: "HS256".to_string(),
        access_token_ttl: 3600,
    })
    .expect("token service should build");

    let app = router::router().with_state(AppState::new(db.clone(), Arc::new(tokens)));

    (app, db)
}

/// Sends a JSON POST to the app.
pub async fn post_json(app: &Router, uri: &str, body: Value) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Sends a form-encoded POST to the app.
pub async fn post_form(app: &Router, uri: &str, body: &str) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Sends a GET, optionally with a bearer token.
pub async fn get(app: &Router, uri: &str, bearer: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    app.clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Reads a response body as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Requests a token for the given credentials and scope string.
pub async fn request_token(app: &Router, username: &str, password: &str, scope: &str) -> Response<Body> {
    post_form(
        app,
        "/oauth2/token",
        &format!("username={username}&password={password}&scope={scope}"),
    )
    .await
}
