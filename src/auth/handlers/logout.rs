/**
 * Logout Handler
 *
 * POST /api/logout (authenticated)
 *
 * Clears the token stored on the user document, revoking every
 * outstanding copy of it, and expires the session cookie.
 */

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::response::{AppendHeaders, Json};
use serde_json::json;

use crate::auth::users::clear_session_token;
use crate::error::ApiError;
use crate::middleware::auth::{CurrentUser, SESSION_COOKIE};
use crate::server::state::AppState;

/// Logout handler
pub async fn logout(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<(AppendHeaders<[(axum::http::HeaderName, String); 1]>, Json<serde_json::Value>), ApiError>
{
    clear_session_token(state.store.as_ref(), user.id).await?;

    tracing::info!(username = %user.username, "user logged out");

    let cookie = format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Strict; Max-Age=0");
    Ok((AppendHeaders([(SET_COOKIE, cookie)]), Json(json!({ "message": "Logout successful" }))))
}
