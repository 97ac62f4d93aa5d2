/**
 * Router Assembly
 *
 * Combines the API routes, request tracing, and the JSON 404 fallback
 * into the final application router.
 */

use axum::http::StatusCode;
use axum::response::Json;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new());

    let router = router
        .fallback(|| async {
            (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "error": "not found", "status": 404 })),
            )
        })
        .layer(TraceLayer::new_for_http());

    router.with_state(state)
}
