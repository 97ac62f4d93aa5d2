/**
 * Session/Identity Resolver
 *
 * Resolves the inbound request's credentials to a `CurrentUser`. The
 * token is taken from the `Authorization: Bearer` header, or from the
 * `access_token` cookie (a `Bearer ` prefix inside the cookie value is
 * tolerated). The token must carry a valid signature, be unexpired,
 * resolve to an existing user, and match the token stored on that user
 * document, so logout revokes outstanding tokens.
 *
 * Handlers declare a `CurrentUser` parameter; the extractor fails with
 * `Unauthenticated` (401) otherwise. The resolved identity always uses
 * the single canonical `id` field.
 */

use axum::extract::FromRequestParts;
use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::http::request::Parts;
use axum::http::HeaderMap;
use uuid::Uuid;

use crate::auth::tokens::{user_id_from_claims, validate_token};
use crate::auth::users::get_user_by_id;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Cookie holding the session token for browser clients
pub const SESSION_COOKIE: &str = "access_token";

/// Identity resolved from a validated session token
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub id: Uuid,
    pub username: String,
    pub telegram_contact: Option<String>,
}

/// Pull the bearer token out of the request headers
///
/// The `Authorization` header wins over the cookie when both are set.
pub fn extract_token(headers: &HeaderMap) -> Option<String> {
    if let Some(value) = headers.get(AUTHORIZATION).and_then(|h| h.to_str().ok()) {
        if let Some(token) = value.strip_prefix("Bearer ") {
            return Some(token.to_string());
        }
    }

    let cookies = headers.get(COOKIE)?.to_str().ok()?;
    for pair in cookies.split(';') {
        let pair = pair.trim();
        if let Some(value) = pair.strip_prefix(SESSION_COOKIE) {
            if let Some(value) = value.strip_prefix('=') {
                let value = value.strip_prefix("Bearer ").unwrap_or(value);
                return Some(value.to_string());
            }
        }
    }
    None
}

/// Validate a token and resolve it to the current user
pub async fn resolve_user(state: &AppState, token: &str) -> Result<CurrentUser, ApiError> {
    let claims = validate_token(token, &state.auth.jwt_secret).map_err(|e| {
        tracing::warn!("token validation failed: {}", e);
        ApiError::unauthenticated("invalid or expired token")
    })?;

    let user_id = user_id_from_claims(&claims)
        .ok_or_else(|| ApiError::unauthenticated("token has no valid subject"))?;

    let user = get_user_by_id(state.store.as_ref(), user_id)
        .await?
        .ok_or_else(|| ApiError::unauthenticated("token does not resolve to a user"))?;

    // Cross-check against the stored token so logout revokes sessions
    if user.token.as_deref() != Some(token) {
        return Err(ApiError::unauthenticated("token has been revoked"));
    }

    Ok(CurrentUser {
        id: user.id,
        username: user.username,
        telegram_contact: user.telegram_contact,
    })
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_token(&parts.headers)
            .ok_or_else(|| ApiError::unauthenticated("missing credentials"))?;
        resolve_user(state, &token).await
    }
}
