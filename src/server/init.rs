/**
 * Server Initialization
 *
 * Builds the application from configuration: connect the document
 * store, run migrations, construct the shared state, and assemble the
 * router. Tests bypass `create_app` and build an `AppState` directly
 * with `MemoryStore` and a stub fetcher.
 */

use std::sync::Arc;

use axum::Router;

use crate::litres::fetch::HttpFetcher;
use crate::routes::create_router;
use crate::server::config::{connect_store, AppConfig, ConfigError};
use crate::server::state::{AppState, AuthConfig};

/// Create and configure the application router
///
/// # Initialization Steps
///
/// 1. Connect the Postgres-backed document store and run migrations
/// 2. Build the shared HTTP fetcher for the import adapter
/// 3. Assemble `AppState` and the router
pub async fn create_app(config: &AppConfig) -> Result<Router<()>, ConfigError> {
    tracing::info!("initializing webshelf server");

    let store = connect_store(config).await?;

    let state = AppState::new(
        Arc::new(store),
        Arc::new(HttpFetcher::new()),
        AuthConfig {
            jwt_secret: config.jwt_secret.clone(),
            token_ttl_secs: config.token_ttl_secs,
        },
    );

    tracing::info!("router configured");
    Ok(create_router(state))
}
