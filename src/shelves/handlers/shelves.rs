/**
 * Shelf HTTP Handlers
 *
 * Shelf CRUD and listings. Creating a shelf also adds the owner as a
 * member; the two writes are not transactional, so a failed membership
 * write triggers a compensating delete of the freshly created shelf.
 */

use axum::extract::{Path, State};
use axum::response::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::auth::CurrentUser;
use crate::policy;
use crate::server::state::AppState;
use crate::shelves::db::{self, Shelf, ShelfMember};

/// Shelf creation request
#[derive(Debug, Deserialize)]
pub struct CreateShelfRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_public")]
    pub public: bool,
}

fn default_public() -> bool {
    true
}

/// List public shelves
pub async fn list_public_shelves(
    State(state): State<AppState>,
) -> Result<Json<Vec<Shelf>>, ApiError> {
    let shelves = db::find_public_shelves(state.store.as_ref()).await?;
    Ok(Json(shelves))
}

/// List shelves owned by the caller
pub async fn my_shelves(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Vec<Shelf>>, ApiError> {
    let shelves = db::find_shelves_by_owner(state.store.as_ref(), user.id).await?;
    Ok(Json(shelves))
}

/// List shelves where the caller is a member
pub async fn member_shelves(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Vec<Shelf>>, ApiError> {
    let shelves = db::find_shelves_by_member(state.store.as_ref(), user.id).await?;
    Ok(Json(shelves))
}

/// Create a shelf and grant its owner membership
pub async fn create_shelf(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(request): Json<CreateShelfRequest>,
) -> Result<Json<Shelf>, ApiError> {
    if request.name.trim().is_empty() {
        return Err(ApiError::validation("shelf name must not be empty"));
    }

    let shelf = Shelf {
        id: Uuid::new_v4(),
        name: request.name,
        description: request.description,
        public: request.public,
        owner_id: user.id,
    };
    let store = state.store.as_ref();
    db::create_shelf(store, &shelf).await?;

    // Second write of the logical "create shelf" operation; compensate
    // on failure so no shelf exists without its owner membership.
    let membership = ShelfMember::new(shelf.id, user.id);
    if let Err(e) = db::create_member(store, &membership).await {
        tracing::error!("owner membership write failed, removing shelf {}: {}", shelf.id, e);
        if let Err(cleanup) = db::delete_shelf(store, shelf.id).await {
            tracing::error!("compensating shelf delete also failed: {}", cleanup);
        }
        return Err(ApiError::Persistence(e));
    }

    Ok(Json(shelf))
}

/// Fetch a single shelf, honoring its visibility
pub async fn get_shelf(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(shelf_id): Path<Uuid>,
) -> Result<Json<Shelf>, ApiError> {
    let shelf = db::get_shelf(state.store.as_ref(), shelf_id)
        .await?
        .ok_or(ApiError::NotFound("Shelf"))?;

    if !policy::can_read_shelf(&user, &shelf) {
        return Err(ApiError::forbidden("this shelf is private"));
    }

    Ok(Json(shelf))
}
