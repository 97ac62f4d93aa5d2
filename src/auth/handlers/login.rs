/**
 * Login Handler
 *
 * POST /api/login
 *
 * Verifies the username/password pair, issues a signed session token,
 * persists it on the user document (enabling server-side revocation on
 * logout), and returns it both in the body and as an HTTP-only,
 * SameSite=Strict cookie.
 *
 * # Security
 *
 * - Unknown username and wrong password return the same 401, so callers
 *   cannot enumerate accounts
 * - Passwords are never logged or echoed back
 */

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::response::{AppendHeaders, Json};

use crate::auth::credentials::verify_password;
use crate::auth::handlers::types::{LoginRequest, LoginResponse, UserSummary};
use crate::auth::tokens::issue_token;
use crate::auth::users::{get_user_by_username, set_session_token};
use crate::error::ApiError;
use crate::middleware::auth::SESSION_COOKIE;
use crate::server::state::AppState;

fn bad_credentials() -> ApiError {
    ApiError::unauthenticated("incorrect username or password")
}

/// Login handler
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<(AppendHeaders<[(axum::http::HeaderName, String); 1]>, Json<LoginResponse>), ApiError> {
    let user = get_user_by_username(state.store.as_ref(), &request.username)
        .await?
        .ok_or_else(bad_credentials)?;

    if !verify_password(&request.password, &user.password) {
        return Err(bad_credentials());
    }

    // Signing can only fail on the server side; the credentials were fine
    let token = issue_token(user.id, &user.username, state.auth.token_ttl_secs, &state.auth.jwt_secret)
        .map_err(|e| {
            tracing::error!("failed to issue token: {}", e);
            ApiError::internal("could not establish a session")
        })?;

    set_session_token(state.store.as_ref(), user.id, &token).await?;

    tracing::info!(username = %user.username, "user logged in");

    let cookie = format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Strict");
    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(LoginResponse {
            message: "Login successful".into(),
            token,
            user: UserSummary::from(&user),
        }),
    ))
}
