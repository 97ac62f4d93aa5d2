/**
 * Book Model and Repository
 *
 * Book documents live in the `books` collection. Reads pass through
 * `book_from_doc`, which normalizes two legacy shapes observed in old
 * data: a single `author` string instead of `authors`, and `ownerId`
 * instead of `user_id`.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::store::{Collection, DocumentStore, StoreError};

/// Provenance tag for a book
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookSource {
    /// Entered by hand
    #[default]
    Manual,
    /// Imported from the Litres catalog
    Litres,
}

/// Book document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    /// Unique book ID
    pub id: Uuid,
    /// Title
    pub title: String,
    /// One or more author names
    pub authors: Vec<String>,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
    /// Optional cover image URL
    #[serde(default)]
    pub image_url: Option<String>,
    /// Owning user
    pub user_id: Uuid,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Provenance tag
    #[serde(default)]
    pub source: BookSource,
    /// Source page URL for imported books
    #[serde(default)]
    pub source_url: Option<String>,
}

/// Deserialize a stored document, normalizing legacy field shapes
fn book_from_doc(mut doc: Value) -> Result<Book, StoreError> {
    if let Some(obj) = doc.as_object_mut() {
        let no_authors = obj
            .get("authors")
            .and_then(Value::as_array)
            .map(Vec::is_empty)
            .unwrap_or(true);
        if no_authors {
            if let Some(author) = obj.get("author").and_then(Value::as_str) {
                let author = author.to_string();
                obj.insert("authors".into(), json!([author]));
            }
        }
        if !obj.contains_key("user_id") {
            if let Some(owner) = obj.remove("ownerId") {
                obj.insert("user_id".into(), owner);
            }
        }
    }
    Ok(serde_json::from_value(doc)?)
}

/// Persist a new book
pub async fn create_book(store: &dyn DocumentStore, book: &Book) -> Result<(), StoreError> {
    store.insert(Collection::Books, book.id, serde_json::to_value(book)?).await
}

/// Look up a book by id
pub async fn get_book(store: &dyn DocumentStore, id: Uuid) -> Result<Option<Book>, StoreError> {
    match store.get(Collection::Books, id).await? {
        Some(doc) => Ok(Some(book_from_doc(doc)?)),
        None => Ok(None),
    }
}

/// Delete a book by id; false when it does not exist
pub async fn delete_book(store: &dyn DocumentStore, id: Uuid) -> Result<bool, StoreError> {
    store.delete(Collection::Books, id).await
}

/// All books, unfiltered
pub async fn list_books(store: &dyn DocumentStore) -> Result<Vec<Book>, StoreError> {
    store.list(Collection::Books).await?.into_iter().map(book_from_doc).collect()
}

/// All books owned by one user
pub async fn find_books_by_owner(
    store: &dyn DocumentStore,
    user_id: Uuid,
) -> Result<Vec<Book>, StoreError> {
    store
        .find(Collection::Books, json!({ "user_id": user_id }))
        .await?
        .into_iter()
        .map(book_from_doc)
        .collect()
}
