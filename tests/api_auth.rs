//! Authentication flow tests
//!
//! Registration, login, logout, and session token lifecycle over the
//! full HTTP surface.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{bearer, register, register_and_login, test_server};

#[tokio::test]
async fn register_returns_user_without_password() {
    let (server, _store) = test_server();

    let response = server
        .post("/api/register")
        .json(&json!({ "username": "alice", "password": "correct-horse" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["user"]["username"], "alice");
    assert!(body["user"].get("password").is_none());
}

#[tokio::test]
async fn register_rejects_duplicate_username() {
    let (server, _store) = test_server();
    register(&server, "alice", "correct-horse").await;

    let response = server
        .post("/api/register")
        .json(&json!({ "username": "alice", "password": "another-pass" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn register_rejects_short_password() {
    let (server, _store) = test_server();

    let response = server
        .post("/api/register")
        .json(&json!({ "username": "alice", "password": "short" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn register_rejects_blank_username() {
    let (server, _store) = test_server();

    let response = server
        .post("/api/register")
        .json(&json!({ "username": "   ", "password": "correct-horse" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn login_returns_token_and_sets_cookie() {
    let (server, _store) = test_server();
    register(&server, "alice", "correct-horse").await;

    let response = server
        .post("/api/login")
        .json(&json!({ "username": "alice", "password": "correct-horse" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let cookie = response
        .header("set-cookie")
        .to_str()
        .expect("set-cookie is not valid ascii")
        .to_string();
    assert!(cookie.starts_with("access_token="));
    assert!(cookie.contains("HttpOnly"));

    let body: serde_json::Value = response.json();
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["user"]["username"], "alice");
}

#[tokio::test]
async fn login_rejects_wrong_password() {
    let (server, _store) = test_server();
    register(&server, "alice", "correct-horse").await;

    let response = server
        .post("/api/login")
        .json(&json!({ "username": "alice", "password": "wrong-horse-ok" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn login_rejects_unknown_user() {
    let (server, _store) = test_server();

    let response = server
        .post("/api/login")
        .json(&json!({ "username": "nobody", "password": "correct-horse" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn profile_requires_authentication() {
    let (server, _store) = test_server();

    let response = server.get("/api/user/profile").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn profile_accessible_with_bearer_token() {
    let (server, _store) = test_server();
    let (user_id, token) = register_and_login(&server, "alice", "correct-horse").await;

    let (name, value) = bearer(&token);
    let response = server.get("/api/user/profile").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["id"], user_id.to_string());
    assert_eq!(body["username"], "alice");
}

#[tokio::test]
async fn logout_revokes_session_token() {
    let (server, _store) = test_server();
    let (_user_id, token) = register_and_login(&server, "alice", "correct-horse").await;

    let (name, value) = bearer(&token);
    let response = server
        .post("/api/logout")
        .add_header(name.clone(), value.clone())
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    // The JWT is still validly signed, but the stored session is gone
    let response = server.get("/api/user/profile").add_header(name, value).await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn login_after_logout_issues_fresh_session() {
    let (server, _store) = test_server();
    let (_user_id, token) = register_and_login(&server, "alice", "correct-horse").await;

    let (name, value) = bearer(&token);
    server.post("/api/logout").add_header(name, value).await;

    let response = server
        .post("/api/login")
        .json(&json!({ "username": "alice", "password": "correct-horse" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: serde_json::Value = response.json();
    let fresh = body["token"].as_str().expect("no token in login response");

    let (name, value) = bearer(fresh);
    let response = server.get("/api/user/profile").add_header(name, value).await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn profile_patch_updates_contact() {
    let (server, _store) = test_server();
    let (_user_id, token) = register_and_login(&server, "alice", "correct-horse").await;

    let (name, value) = bearer(&token);
    let response = server
        .patch("/api/user/profile")
        .add_header(name.clone(), value.clone())
        .json(&json!({ "telegram_contact": "@alice" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = server.get("/api/user/profile").add_header(name, value).await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["telegram_contact"], "@alice");
}

#[tokio::test]
async fn profile_patch_with_no_fields_is_rejected() {
    let (server, _store) = test_server();
    let (_user_id, token) = register_and_login(&server, "alice", "correct-horse").await;

    let (name, value) = bearer(&token);
    let response = server
        .patch("/api/user/profile")
        .add_header(name, value)
        .json(&json!({}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn profile_patch_ignores_null_fields() {
    let (server, _store) = test_server();
    let (_user_id, token) = register_and_login(&server, "alice", "correct-horse").await;

    let (name, value) = bearer(&token);
    let response = server
        .patch("/api/user/profile")
        .add_header(name.clone(), value.clone())
        .json(&json!({ "telegram_contact": "@alice" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    // A null field is treated as absent, so this patch carries nothing
    let response = server
        .patch("/api/user/profile")
        .add_header(name.clone(), value.clone())
        .json(&json!({ "telegram_contact": null }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let response = server.get("/api/user/profile").add_header(name, value).await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["telegram_contact"], "@alice");
}

#[tokio::test]
async fn garbage_token_is_rejected() {
    let (server, _store) = test_server();

    let (name, value) = bearer("not-a-jwt");
    let response = server.get("/api/user/profile").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}
