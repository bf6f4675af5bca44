//! API-contract tests: authentication, scope checks, account creation rules,
//! and soft-delete behavior over the real router.

mod common;

use axum::http::{header, StatusCode};
use serde_json::json;

use common::{body_json, get, post_json, request_token, setup_app};
use modhost::data::user::UserRepository;
use test_utils::factory::user::{UserFactory, TEST_USER_PASSWORD};

fn account(email: &str, display_name: &str) -> serde_json::Value {
    json!({
        "email": email,
        "display_name": display_name,
        "password": "a-long-enough-password",
        "bio": "I make mods.",
    })
}

#[tokio::test]
async fn unauthenticated_me_returns_401() {
    let (app, _db) = setup_app().await;

    let response = get(&app, "/users/me", None).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().contains_key(header::WWW_AUTHENTICATE));
}

#[tokio::test]
async fn garbage_token_returns_401() {
    let (app, _db) = setup_app().await;

    let response = get(&app, "/users/me", Some("not.a.token")).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn created_account_can_authenticate_and_fetch_itself() {
    let (app, _db) = setup_app().await;

    let created = post_json(&app, "/users/", account("ada@example.com", "ada")).await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let created = body_json(created).await;
    assert_eq!(created["email"], "ada@example.com");
    assert!(created.get("password").is_none());

    let token_response = request_token(&app, "ada@example.com", "a-long-enough-password", "me").await;
    assert_eq!(token_response.status(), StatusCode::OK);
    let token_body = body_json(token_response).await;
    assert_eq!(token_body["token_type"], "bearer");
    let token = token_body["access_token"].as_str().unwrap().to_string();

    let me = get(&app, "/users/me", Some(&token)).await;
    assert_eq!(me.status(), StatusCode::OK);
    let me = body_json(me).await;
    assert_eq!(me["display_name"], "ada");
    assert_eq!(me["email"], "ada@example.com");
    assert_eq!(me["id"], created["id"]);
    // authenticate() stamps the login time before the token is issued
    assert!(!me["authenticated_at"].is_null());
}

#[tokio::test]
async fn display_name_works_as_login_identifier() {
    let (app, _db) = setup_app().await;

    post_json(&app, "/users/", account("grace@example.com", "grace")).await;

    let response = request_token(&app, "grace", "a-long-enough-password", "me").await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn wrong_password_returns_401() {
    let (app, _db) = setup_app().await;

    post_json(&app, "/users/", account("ada@example.com", "ada")).await;

    let response = request_token(&app, "ada@example.com", "wrong-password", "me").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().contains_key(header::WWW_AUTHENTICATE));
}

#[tokio::test]
async fn token_without_me_scope_is_rejected_by_me() {
    let (app, _db) = setup_app().await;

    post_json(&app, "/users/", account("ada@example.com", "ada")).await;

    // Token issued with no scopes at all
    let token_response = request_token(&app, "ada@example.com", "a-long-enough-password", "").await;
    assert_eq!(token_response.status(), StatusCode::OK);
    let token = body_json(token_response).await["access_token"]
        .as_str()
        .unwrap()
        .to_string();

    let me = get(&app, "/users/me", Some(&token)).await;

    assert_eq!(me.status(), StatusCode::UNAUTHORIZED);
    let challenge = me.headers()[header::WWW_AUTHENTICATE].to_str().unwrap().to_string();
    assert!(challenge.contains("me"));
}

#[tokio::test]
async fn duplicate_email_returns_400() {
    let (app, _db) = setup_app().await;

    post_json(&app, "/users/", account("ada@example.com", "ada")).await;

    let response = post_json(&app, "/users/", account("ada@example.com", "ada2")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn duplicate_display_name_returns_400() {
    let (app, _db) = setup_app().await;

    post_json(&app, "/users/", account("ada@example.com", "ada")).await;

    let response = post_json(&app, "/users/", account("other@example.com", "ada")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn invalid_display_name_returns_400() {
    let (app, _db) = setup_app().await;

    let response = post_json(&app, "/users/", account("ada@example.com", "-bad name-")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn deactivated_user_cannot_get_a_token() {
    let (app, db) = setup_app().await;

    let user = UserFactory::new(&db).deactivated().build().await.unwrap();

    let response = request_token(&app, &user.email, TEST_USER_PASSWORD, "me").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn deactivation_turns_an_existing_token_into_400() {
    let (app, db) = setup_app().await;

    let user = UserFactory::new(&db).build().await.unwrap();

    let token_response = request_token(&app, &user.email, TEST_USER_PASSWORD, "me").await;
    assert_eq!(token_response.status(), StatusCode::OK);
    let token = body_json(token_response).await["access_token"]
        .as_str()
        .unwrap()
        .to_string();

    UserRepository::new(&db).deactivate(user.id).await.unwrap();

    let me = get(&app, "/users/me", Some(&token)).await;

    assert_eq!(me.status(), StatusCode::BAD_REQUEST);
}
