/**
 * Document Store Abstraction
 *
 * This module defines the `DocumentStore` trait that all persistence
 * backends implement. A document is a flat JSON object keyed by a
 * generated UUID; documents also carry their own `id` field so reads
 * can be deserialized into model types directly.
 *
 * # Operations
 *
 * All operations are atomic per document. There is no multi-document
 * transaction boundary; callers that need compensation on partial
 * failure perform it themselves (see shelf creation).
 *
 * # Filtering
 *
 * `find` performs an equality-filtered scan: every key/value pair of the
 * filter object must match the document. This mirrors the containment
 * semantics of Postgres JSONB (`doc @> filter`).
 */

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

/// The fixed set of logical collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Books,
    Shelves,
    ShelfMembers,
    ShelfBooks,
}

impl Collection {
    /// Table name backing this collection
    pub fn table(&self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Books => "books",
            Self::Shelves => "shelves",
            Self::ShelfMembers => "shelf_members",
            Self::ShelfBooks => "shelf_books",
        }
    }
}

/// Errors surfaced by document store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying database failure (connection, query, decode)
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored document did not match the expected model shape
    #[error("document codec error: {0}")]
    Codec(#[from] serde_json::Error),

    /// An insert collided with an existing record on a unique key
    #[error("unique constraint violated")]
    UniqueViolation,
}

impl StoreError {
    /// Convert an insert failure, surfacing unique-key collisions as
    /// their own variant so callers can report a conflict
    pub(crate) fn from_insert(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => Self::UniqueViolation,
            _ => Self::Database(err),
        }
    }
}

/// Document database client
///
/// Implemented by `PgStore` (production) and `MemoryStore` (tests).
/// Handlers receive this as `Arc<dyn DocumentStore>` via `AppState`.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a document under the given id
    async fn insert(&self, collection: Collection, id: Uuid, doc: Value) -> Result<(), StoreError>;

    /// Fetch a document by id
    async fn get(&self, collection: Collection, id: Uuid) -> Result<Option<Value>, StoreError>;

    /// Merge the top-level fields of `patch` into an existing document
    ///
    /// Returns `false` when no document with that id exists.
    async fn update(&self, collection: Collection, id: Uuid, patch: Value)
        -> Result<bool, StoreError>;

    /// Delete a document by id
    ///
    /// Returns `false` when no document with that id exists.
    async fn delete(&self, collection: Collection, id: Uuid) -> Result<bool, StoreError>;

    /// Equality-filtered scan over a collection
    async fn find(&self, collection: Collection, filter: Value) -> Result<Vec<Value>, StoreError>;

    /// Unfiltered scan over a collection
    async fn list(&self, collection: Collection) -> Result<Vec<Value>, StoreError>;
}
