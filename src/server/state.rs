/**
 * Application State
 *
 * Central state container shared by all handlers. Holds the document
 * store handle, the page fetcher used by the book import adapter, and
 * the authentication settings. Everything is constructed at startup and
 * dependency-injected; there is no module-level global state.
 *
 * `FromRef` implementations let handlers extract just the part of the
 * state they need, following Axum's recommended pattern.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::litres::fetch::PageFetcher;
use crate::store::DocumentStore;

/// Token signing settings
#[derive(Clone)]
pub struct AuthConfig {
    /// Server-held secret used to sign session tokens
    pub jwt_secret: String,
    /// Lifetime of issued tokens in seconds
    pub token_ttl_secs: i64,
}

/// Application state shared across request handlers
#[derive(Clone)]
pub struct AppState {
    /// Document store handle, opened once at startup
    pub store: Arc<dyn DocumentStore>,
    /// Fetcher for external book pages (mockable in tests)
    pub fetcher: Arc<dyn PageFetcher>,
    /// Authentication settings
    pub auth: AuthConfig,
}

impl AppState {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        fetcher: Arc<dyn PageFetcher>,
        auth: AuthConfig,
    ) -> Self {
        Self { store, fetcher, auth }
    }
}

impl FromRef<AppState> for Arc<dyn DocumentStore> {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl FromRef<AppState> for Arc<dyn PageFetcher> {
    fn from_ref(state: &AppState) -> Self {
        state.fetcher.clone()
    }
}

impl FromRef<AppState> for AuthConfig {
    fn from_ref(state: &AppState) -> Self {
        state.auth.clone()
    }
}
