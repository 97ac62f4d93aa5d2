/**
 * Import Endpoints
 *
 * - `GET /api/bookslitres?url=` - preview: fetch and parse only
 * - `POST /api/bookslitres/save?url=` - parse, then persist a `litres`
 *   book under the caller's identity
 *
 * Both validate that the URL points at the allowed source domain before
 * any network activity.
 */

use axum::extract::{Query, State};
use axum::response::Json;
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::books::db::{create_book, Book, BookSource};
use crate::error::ApiError;
use crate::litres::extract::{extract_book_details, BookDetails};
use crate::litres::fetch::validate_source;
use crate::middleware::auth::CurrentUser;
use crate::server::state::AppState;

/// Import query parameters
#[derive(Debug, Deserialize)]
pub struct ImportQuery {
    pub url: String,
}

async fn fetch_details(state: &AppState, url: &str) -> Result<BookDetails, ApiError> {
    validate_source(url)?;
    let html = state.fetcher.fetch(url).await?;
    Ok(extract_book_details(&html))
}

/// Parse a book page without persisting anything
pub async fn preview_import(
    State(state): State<AppState>,
    Query(query): Query<ImportQuery>,
) -> Result<Json<BookDetails>, ApiError> {
    let details = fetch_details(&state, &query.url).await?;
    Ok(Json(details))
}

/// Parse a book page and save it to the caller's library
pub async fn save_import(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<ImportQuery>,
) -> Result<Json<Book>, ApiError> {
    let details = fetch_details(&state, &query.url).await?;

    let book = Book {
        id: Uuid::new_v4(),
        title: details.title,
        authors: details.authors,
        description: (!details.description.is_empty()).then_some(details.description),
        image_url: (!details.image_url.is_empty()).then_some(details.image_url),
        user_id: user.id,
        created_at: Utc::now(),
        source: BookSource::Litres,
        source_url: Some(query.url),
    };
    create_book(state.store.as_ref(), &book).await?;

    tracing::info!(book_id = %book.id, username = %user.username, "imported book from litres");

    Ok(Json(book))
}
