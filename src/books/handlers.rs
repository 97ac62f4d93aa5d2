/**
 * Book HTTP Handlers
 *
 * - `GET /api/books` - list every book (unauthenticated; the global
 *   catalog is deliberately open)
 * - `POST /api/books` - create a manually entered book for the caller
 * - `DELETE /api/books/{id}` - delete one of the caller's books
 *
 * Deletion checks ownership: a missing book is 404, someone else's book
 * is 403.
 */

use axum::extract::{Path, State};
use axum::response::Json;
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::books::db::{self, Book, BookSource};
use crate::error::ApiError;
use crate::middleware::auth::CurrentUser;
use crate::policy;
use crate::server::state::AppState;

/// Book creation request
///
/// The provenance tag is not client-controlled: books created here are
/// always `manual`, and only the import adapter writes `litres`.
#[derive(Debug, Deserialize)]
pub struct CreateBookRequest {
    pub title: String,
    pub authors: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
}

/// List all books
pub async fn list_books(State(state): State<AppState>) -> Result<Json<Vec<Book>>, ApiError> {
    let books = db::list_books(state.store.as_ref()).await?;
    Ok(Json(books))
}

/// Create a book owned by the caller
pub async fn create_book(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(request): Json<CreateBookRequest>,
) -> Result<Json<Book>, ApiError> {
    if request.title.trim().is_empty() {
        return Err(ApiError::validation("title must not be empty"));
    }
    if request.authors.iter().all(|a| a.trim().is_empty()) {
        return Err(ApiError::validation("at least one author is required"));
    }

    let book = Book {
        id: Uuid::new_v4(),
        title: request.title,
        authors: request.authors,
        description: request.description,
        image_url: request.image_url,
        user_id: user.id,
        created_at: Utc::now(),
        source: BookSource::Manual,
        source_url: request.source_url,
    };
    db::create_book(state.store.as_ref(), &book).await?;

    Ok(Json(book))
}

/// Delete one of the caller's books
pub async fn delete_book(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(book_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let book = db::get_book(state.store.as_ref(), book_id)
        .await?
        .ok_or(ApiError::NotFound("Book"))?;

    if !policy::can_delete_book(&user, &book) {
        return Err(ApiError::forbidden("you can only delete your own books"));
    }

    db::delete_book(state.store.as_ref(), book_id).await?;
    Ok(Json(json!({ "message": "Book deleted" })))
}
