/**
 * User Self-Service Handlers
 *
 * Authenticated profile and per-user listings:
 *
 * - `GET /api/user/profile` - the caller's profile
 * - `PATCH /api/user/profile` - partial profile update (null fields ignored)
 * - `GET /api/user/books` - books owned by the caller
 * - `GET /api/user/shelves` - shelves owned by the caller
 */

use axum::extract::State;
use axum::response::Json;
use serde::Deserialize;
use serde_json::json;

use crate::auth::handlers::types::UserSummary;
use crate::auth::users::update_profile as db_update_profile;
use crate::books::db::{find_books_by_owner, Book};
use crate::error::ApiError;
use crate::middleware::auth::CurrentUser;
use crate::server::state::AppState;
use crate::shelves::db::{find_shelves_by_owner, Shelf};

/// Partial profile update; absent/null fields are left unchanged
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub telegram_contact: Option<String>,
}

/// The caller's own profile
pub async fn get_profile(user: CurrentUser) -> Json<UserSummary> {
    Json(UserSummary {
        id: user.id,
        username: user.username,
        telegram_contact: user.telegram_contact,
    })
}

/// Apply a partial profile update
pub async fn update_profile(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let mut patch = serde_json::Map::new();
    if let Some(contact) = request.telegram_contact {
        patch.insert("telegram_contact".into(), json!(contact));
    }
    if patch.is_empty() {
        return Err(ApiError::validation("no fields to update"));
    }

    let updated =
        db_update_profile(state.store.as_ref(), user.id, serde_json::Value::Object(patch)).await?;
    if !updated {
        return Err(ApiError::NotFound("User"));
    }

    Ok(Json(json!({ "message": "Profile updated" })))
}

/// Books owned by the caller
pub async fn user_books(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Vec<Book>>, ApiError> {
    let books = find_books_by_owner(state.store.as_ref(), user.id).await?;
    Ok(Json(books))
}

/// Shelves owned by the caller
pub async fn user_shelves(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Vec<Shelf>>, ApiError> {
    let shelves = find_shelves_by_owner(state.store.as_ref(), user.id).await?;
    Ok(Json(shelves))
}
