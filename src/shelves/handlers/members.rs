/**
 * Shelf Membership Handlers
 *
 * Membership management on a shelf. Writes are owner-only; reads follow
 * shelf visibility. A missing shelf/member/user is 404 before any
 * ownership check.
 */

use axum::extract::{Path, State};
use axum::response::Json;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::auth::users::get_user_by_id;
use crate::error::ApiError;
use crate::middleware::auth::CurrentUser;
use crate::policy;
use crate::server::state::AppState;
use crate::shelves::db::{self, Shelf, ShelfMember};

/// Membership creation request
#[derive(Debug, Deserialize)]
pub struct AddMemberRequest {
    pub user_id: Uuid,
}

async fn load_shelf(state: &AppState, shelf_id: Uuid) -> Result<Shelf, ApiError> {
    db::get_shelf(state.store.as_ref(), shelf_id).await?.ok_or(ApiError::NotFound("Shelf"))
}

/// Add a member to an owned shelf
pub async fn add_member(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(shelf_id): Path<Uuid>,
    Json(request): Json<AddMemberRequest>,
) -> Result<Json<ShelfMember>, ApiError> {
    let shelf = load_shelf(&state, shelf_id).await?;
    if !policy::can_write_shelf(&user, &shelf) {
        return Err(ApiError::forbidden("only the owner may add members"));
    }

    // Membership must reference an existing user at creation time
    if get_user_by_id(state.store.as_ref(), request.user_id).await?.is_none() {
        return Err(ApiError::NotFound("User"));
    }

    let member = ShelfMember::new(shelf_id, request.user_id);
    db::create_member(state.store.as_ref(), &member).await?;
    Ok(Json(member))
}

/// List a shelf's members
pub async fn list_members(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(shelf_id): Path<Uuid>,
) -> Result<Json<Vec<ShelfMember>>, ApiError> {
    let shelf = load_shelf(&state, shelf_id).await?;
    if !policy::can_read_shelf(&user, &shelf) {
        return Err(ApiError::forbidden("this shelf is private"));
    }

    let members = db::find_members_by_shelf(state.store.as_ref(), shelf_id).await?;
    Ok(Json(members))
}

/// Remove a membership record from an owned shelf
pub async fn remove_member(
    State(state): State<AppState>,
    user: CurrentUser,
    Path((shelf_id, member_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let shelf = load_shelf(&state, shelf_id).await?;
    if !policy::can_write_shelf(&user, &shelf) {
        return Err(ApiError::forbidden("only the owner may remove members"));
    }

    let member = db::get_member(state.store.as_ref(), member_id)
        .await?
        .filter(|m| m.shelf_id == shelf_id)
        .ok_or(ApiError::NotFound("Member"))?;

    db::delete_member(state.store.as_ref(), member.id).await?;
    Ok(Json(json!({ "message": "Member deleted" })))
}
