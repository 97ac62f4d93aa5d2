/**
 * Registration Handler
 *
 * POST /api/register
 *
 * 1. Validate username and password
 * 2. Reject duplicate usernames with 409 Conflict
 * 3. Hash the password (bcrypt)
 * 4. Persist the user and return a summary (never the hash)
 */

use axum::extract::State;
use axum::response::Json;

use crate::auth::credentials::hash_password;
use crate::auth::handlers::types::{RegisterRequest, RegisterResponse, UserSummary};
use crate::auth::users::{create_user, get_user_by_username, User};
use crate::error::ApiError;
use crate::server::state::AppState;
use crate::store::StoreError;

const MIN_PASSWORD_LEN: usize = 8;

/// Register handler
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, ApiError> {
    let username = request.username.trim();
    if username.is_empty() {
        return Err(ApiError::validation("username must not be empty"));
    }
    if request.password.len() < MIN_PASSWORD_LEN {
        return Err(ApiError::validation(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }

    if get_user_by_username(state.store.as_ref(), username).await?.is_some() {
        return Err(ApiError::conflict("username already exists"));
    }

    let password_hash = hash_password(&request.password)
        .map_err(|e| ApiError::validation(format!("unusable password: {e}")))?;

    let user = User::new(username.to_string(), password_hash, request.telegram_contact);
    // The store enforces username uniqueness; a concurrent registration
    // that slipped past the lookup above still surfaces as a conflict
    match create_user(state.store.as_ref(), &user).await {
        Ok(()) => {}
        Err(StoreError::UniqueViolation) => {
            return Err(ApiError::conflict("username already exists"));
        }
        Err(e) => return Err(e.into()),
    }

    tracing::info!(username = %user.username, "registered new user");

    Ok(Json(RegisterResponse {
        message: "Registration successful".into(),
        user: UserSummary::from(&user),
    }))
}
