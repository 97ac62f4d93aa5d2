/**
 * Shelf-Book Link Handlers
 *
 * Linking a book onto a shelf requires owning both the shelf and the
 * book; unlinking requires owning the shelf. Listing follows shelf
 * visibility and returns the full book documents, skipping links whose
 * book has since been deleted.
 */

use axum::extract::{Path, State};
use axum::response::Json;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::books::db as books_db;
use crate::books::db::Book;
use crate::error::ApiError;
use crate::middleware::auth::CurrentUser;
use crate::policy;
use crate::server::state::AppState;
use crate::shelves::db::{self, Shelf, ShelfBook};

/// Link creation request
#[derive(Debug, Deserialize)]
pub struct AddShelfBookRequest {
    pub book_id: Uuid,
}

async fn load_shelf(state: &AppState, shelf_id: Uuid) -> Result<Shelf, ApiError> {
    db::get_shelf(state.store.as_ref(), shelf_id).await?.ok_or(ApiError::NotFound("Shelf"))
}

/// Link one of the caller's books onto an owned shelf
pub async fn add_book_to_shelf(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(shelf_id): Path<Uuid>,
    Json(request): Json<AddShelfBookRequest>,
) -> Result<Json<ShelfBook>, ApiError> {
    let shelf = load_shelf(&state, shelf_id).await?;
    let book = books_db::get_book(state.store.as_ref(), request.book_id)
        .await?
        .ok_or(ApiError::NotFound("Book"))?;

    if !policy::can_link_book_to_shelf(&user, &shelf, &book) {
        return Err(ApiError::forbidden(
            "you can only add your own books to your own shelves",
        ));
    }

    let link = ShelfBook::new(shelf_id, book.id, user.id);
    db::create_shelf_book(state.store.as_ref(), &link).await?;
    Ok(Json(link))
}

/// List the books on a shelf
pub async fn list_shelf_books(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(shelf_id): Path<Uuid>,
) -> Result<Json<Vec<Book>>, ApiError> {
    let shelf = load_shelf(&state, shelf_id).await?;
    if !policy::can_read_shelf(&user, &shelf) {
        return Err(ApiError::forbidden("this shelf is private"));
    }

    let links = db::find_shelf_books(state.store.as_ref(), shelf_id).await?;
    let mut books = Vec::with_capacity(links.len());
    for link in links {
        // Skip dangling links whose book was deleted
        if let Some(book) = books_db::get_book(state.store.as_ref(), link.book_id).await? {
            books.push(book);
        }
    }
    Ok(Json(books))
}

/// Remove a book from an owned shelf
pub async fn remove_book_from_shelf(
    State(state): State<AppState>,
    user: CurrentUser,
    Path((shelf_id, book_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let shelf = load_shelf(&state, shelf_id).await?;
    if !policy::can_write_shelf(&user, &shelf) {
        return Err(ApiError::forbidden("only the owner may remove books from a shelf"));
    }

    let link = db::find_link(state.store.as_ref(), shelf_id, book_id)
        .await?
        .ok_or(ApiError::NotFound("Shelf book"))?;

    db::delete_shelf_book(state.store.as_ref(), link.id).await?;
    Ok(Json(json!({ "message": "Book deleted from shelf" })))
}
