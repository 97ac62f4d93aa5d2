//! Common test utilities
//!
//! Builds a `TestServer` over the real router with an in-memory
//! document store and a stub page fetcher, so the full HTTP surface is
//! exercised without a live database or network access.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use uuid::Uuid;

use webshelf::litres::fetch::PageFetcher;
use webshelf::litres::ImportError;
use webshelf::{create_router, AppState, AuthConfig, MemoryStore};

/// Stub fetcher serving canned pages keyed by URL
#[derive(Default)]
pub struct StubFetcher {
    pages: HashMap<String, String>,
}

#[allow(dead_code)]
impl StubFetcher {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_page(url: impl Into<String>, html: impl Into<String>) -> Self {
        let mut pages = HashMap::new();
        pages.insert(url.into(), html.into());
        Self { pages }
    }
}

#[async_trait]
impl PageFetcher for StubFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ImportError> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ImportError::FetchFailed("connection refused".to_string()))
    }
}

/// Build a test server plus a handle to its in-memory store
pub fn test_server_with_fetcher(fetcher: StubFetcher) -> (TestServer, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(
        store.clone(),
        Arc::new(fetcher),
        AuthConfig {
            jwt_secret: "integration-test-secret".to_string(),
            token_ttl_secs: 3600,
        },
    );
    let server = TestServer::new(create_router(state)).expect("failed to build test server");
    (server, store)
}

/// Build a test server with no canned pages
#[allow(dead_code)]
pub fn test_server() -> (TestServer, Arc<MemoryStore>) {
    test_server_with_fetcher(StubFetcher::empty())
}

/// Register a user, returning their id
#[allow(dead_code)]
pub async fn register(server: &TestServer, username: &str, password: &str) -> Uuid {
    let response = server
        .post("/api/register")
        .json(&serde_json::json!({ "username": username, "password": password }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK, "registration failed");

    let body: serde_json::Value = response.json();
    body["user"]["id"]
        .as_str()
        .and_then(|id| Uuid::parse_str(id).ok())
        .expect("registration response has no user id")
}

/// Register and log in, returning the user's id and session token
#[allow(dead_code)]
pub async fn register_and_login(
    server: &TestServer,
    username: &str,
    password: &str,
) -> (Uuid, String) {
    let user_id = register(server, username, password).await;

    let response = server
        .post("/api/login")
        .json(&serde_json::json!({ "username": username, "password": password }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK, "login failed");

    let body: serde_json::Value = response.json();
    let token = body["token"]
        .as_str()
        .expect("login response has no token")
        .to_string();
    (user_id, token)
}

/// `Authorization: Bearer` header for a session token
#[allow(dead_code)]
pub fn bearer(token: &str) -> (HeaderName, HeaderValue) {
    (
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {token}")).expect("invalid token header"),
    )
}
