//! Shelf-book link endpoint tests
//!
//! Linking requires owning both shelf and book; listings follow shelf
//! visibility and skip links whose book has been deleted.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use common::{bearer, register_and_login, test_server};

async fn create_book(server: &axum_test::TestServer, token: &str, title: &str) -> String {
    let (name, value) = bearer(token);
    let response = server
        .post("/api/books")
        .add_header(name, value)
        .json(&json!({ "title": title, "authors": ["Test Author"] }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    body["id"].as_str().unwrap().to_string()
}

async fn create_shelf(
    server: &axum_test::TestServer,
    token: &str,
    name: &str,
    public: bool,
) -> String {
    let (header, value) = bearer(token);
    let response = server
        .post("/api/shelves")
        .add_header(header, value)
        .json(&json!({ "name": name, "public": public }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    body["id"].as_str().unwrap().to_string()
}

async fn link_book(
    server: &axum_test::TestServer,
    token: &str,
    shelf_id: &str,
    book_id: &str,
) -> axum_test::TestResponse {
    let (name, value) = bearer(token);
    server
        .post(&format!("/api/shelves/{shelf_id}/books"))
        .add_header(name, value)
        .json(&json!({ "book_id": book_id }))
        .await
}

#[tokio::test]
async fn owner_links_own_book_and_lists_it() {
    let (server, _store) = test_server();
    let (_id, token) = register_and_login(&server, "alice", "correct-horse").await;
    let shelf_id = create_shelf(&server, &token, "Classics", true).await;
    let book_id = create_book(&server, &token, "Dead Souls").await;

    let response = link_book(&server, &token, &shelf_id, &book_id).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let (name, value) = bearer(&token);
    let response = server
        .get(&format!("/api/shelves/{shelf_id}/books"))
        .add_header(name, value)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let books: Vec<serde_json::Value> = response.json();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["title"], "Dead Souls");
}

#[tokio::test]
async fn linking_foreign_book_is_forbidden() {
    let (server, _store) = test_server();
    let (_alice, alice_token) = register_and_login(&server, "alice", "correct-horse").await;
    let (_bob, bob_token) = register_and_login(&server, "bob", "battery-staple").await;

    let shelf_id = create_shelf(&server, &alice_token, "Classics", true).await;
    let book_id = create_book(&server, &bob_token, "Dead Souls").await;

    let response = link_book(&server, &alice_token, &shelf_id, &book_id).await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn linking_to_foreign_shelf_is_forbidden() {
    let (server, _store) = test_server();
    let (_alice, alice_token) = register_and_login(&server, "alice", "correct-horse").await;
    let (_bob, bob_token) = register_and_login(&server, "bob", "battery-staple").await;

    let shelf_id = create_shelf(&server, &alice_token, "Classics", true).await;
    let book_id = create_book(&server, &bob_token, "Dead Souls").await;

    let response = link_book(&server, &bob_token, &shelf_id, &book_id).await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn linking_missing_book_is_not_found() {
    let (server, _store) = test_server();
    let (_id, token) = register_and_login(&server, "alice", "correct-horse").await;
    let shelf_id = create_shelf(&server, &token, "Classics", true).await;

    let response = link_book(&server, &token, &shelf_id, &Uuid::new_v4().to_string()).await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn private_shelf_books_hidden_from_non_owner() {
    let (server, _store) = test_server();
    let (_alice, alice_token) = register_and_login(&server, "alice", "correct-horse").await;
    let (_bob, bob_token) = register_and_login(&server, "bob", "battery-staple").await;

    let shelf_id = create_shelf(&server, &alice_token, "Secret stash", false).await;

    let (name, value) = bearer(&bob_token);
    let response = server
        .get(&format!("/api/shelves/{shelf_id}/books"))
        .add_header(name, value)
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn listing_skips_links_to_deleted_books() {
    let (server, _store) = test_server();
    let (_id, token) = register_and_login(&server, "alice", "correct-horse").await;
    let shelf_id = create_shelf(&server, &token, "Classics", true).await;
    let keep = create_book(&server, &token, "Dead Souls").await;
    let gone = create_book(&server, &token, "Oblomov").await;

    link_book(&server, &token, &shelf_id, &keep).await;
    link_book(&server, &token, &shelf_id, &gone).await;

    let (name, value) = bearer(&token);
    server
        .delete(&format!("/api/books/{gone}"))
        .add_header(name.clone(), value.clone())
        .await;

    let response = server
        .get(&format!("/api/shelves/{shelf_id}/books"))
        .add_header(name, value)
        .await;
    let books: Vec<serde_json::Value> = response.json();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["title"], "Dead Souls");
}

#[tokio::test]
async fn owner_can_unlink_book() {
    let (server, _store) = test_server();
    let (_id, token) = register_and_login(&server, "alice", "correct-horse").await;
    let shelf_id = create_shelf(&server, &token, "Classics", true).await;
    let book_id = create_book(&server, &token, "Dead Souls").await;
    link_book(&server, &token, &shelf_id, &book_id).await;

    let (name, value) = bearer(&token);
    let response = server
        .delete(&format!("/api/shelves/{shelf_id}/books/{book_id}"))
        .add_header(name.clone(), value.clone())
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    // The book survives in the catalog; only the link is gone
    let response = server
        .get(&format!("/api/shelves/{shelf_id}/books"))
        .add_header(name, value)
        .await;
    let books: Vec<serde_json::Value> = response.json();
    assert!(books.is_empty());

    let response = server.get("/api/books").await;
    let catalog: Vec<serde_json::Value> = response.json();
    assert_eq!(catalog.len(), 1);
}

#[tokio::test]
async fn unlinking_missing_link_is_not_found() {
    let (server, _store) = test_server();
    let (_id, token) = register_and_login(&server, "alice", "correct-horse").await;
    let shelf_id = create_shelf(&server, &token, "Classics", true).await;
    let book_id = create_book(&server, &token, "Dead Souls").await;

    let (name, value) = bearer(&token);
    let response = server
        .delete(&format!("/api/shelves/{shelf_id}/books/{book_id}"))
        .add_header(name, value)
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
