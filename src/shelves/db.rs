/**
 * Shelf, Membership, and Shelf-Book Models and Repository
 *
 * Three collections: `shelves`, `shelf_members` (users granted access
 * beyond the owner), and `shelf_books` (links between shelves and
 * books, recording which user made the link). Every record carries the
 * owner/creator reference used by the policy checks.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::store::{Collection, DocumentStore, StoreError};

/// Shelf document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shelf {
    /// Unique shelf ID
    pub id: Uuid,
    /// Shelf name
    pub name: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
    /// Public shelves are readable by anyone
    pub public: bool,
    /// Owning user
    pub owner_id: Uuid,
}

/// Shelf membership join record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShelfMember {
    pub id: Uuid,
    pub shelf_id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Shelf-book link join record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShelfBook {
    pub id: Uuid,
    pub shelf_id: Uuid,
    pub book_id: Uuid,
    /// User who made the link
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl ShelfMember {
    pub fn new(shelf_id: Uuid, user_id: Uuid) -> Self {
        Self { id: Uuid::new_v4(), shelf_id, user_id, created_at: Utc::now() }
    }
}

impl ShelfBook {
    pub fn new(shelf_id: Uuid, book_id: Uuid, user_id: Uuid) -> Self {
        Self { id: Uuid::new_v4(), shelf_id, book_id, user_id, created_at: Utc::now() }
    }
}

fn from_docs<T: serde::de::DeserializeOwned>(
    docs: Vec<serde_json::Value>,
) -> Result<Vec<T>, StoreError> {
    docs.into_iter().map(|doc| Ok(serde_json::from_value(doc)?)).collect()
}

// Shelves

pub async fn create_shelf(store: &dyn DocumentStore, shelf: &Shelf) -> Result<(), StoreError> {
    store.insert(Collection::Shelves, shelf.id, serde_json::to_value(shelf)?).await
}

pub async fn get_shelf(store: &dyn DocumentStore, id: Uuid) -> Result<Option<Shelf>, StoreError> {
    match store.get(Collection::Shelves, id).await? {
        Some(doc) => Ok(Some(serde_json::from_value(doc)?)),
        None => Ok(None),
    }
}

pub async fn delete_shelf(store: &dyn DocumentStore, id: Uuid) -> Result<bool, StoreError> {
    store.delete(Collection::Shelves, id).await
}

pub async fn find_public_shelves(store: &dyn DocumentStore) -> Result<Vec<Shelf>, StoreError> {
    from_docs(store.find(Collection::Shelves, json!({ "public": true })).await?)
}

pub async fn find_shelves_by_owner(
    store: &dyn DocumentStore,
    owner_id: Uuid,
) -> Result<Vec<Shelf>, StoreError> {
    from_docs(store.find(Collection::Shelves, json!({ "owner_id": owner_id })).await?)
}

/// Shelves the user belongs to through a membership record
///
/// Dangling memberships (shelf deleted since) are skipped.
pub async fn find_shelves_by_member(
    store: &dyn DocumentStore,
    user_id: Uuid,
) -> Result<Vec<Shelf>, StoreError> {
    let memberships: Vec<ShelfMember> =
        from_docs(store.find(Collection::ShelfMembers, json!({ "user_id": user_id })).await?)?;

    let mut shelves = Vec::with_capacity(memberships.len());
    for membership in memberships {
        if let Some(shelf) = get_shelf(store, membership.shelf_id).await? {
            shelves.push(shelf);
        }
    }
    Ok(shelves)
}

// Memberships

pub async fn create_member(
    store: &dyn DocumentStore,
    member: &ShelfMember,
) -> Result<(), StoreError> {
    store.insert(Collection::ShelfMembers, member.id, serde_json::to_value(member)?).await
}

pub async fn get_member(
    store: &dyn DocumentStore,
    id: Uuid,
) -> Result<Option<ShelfMember>, StoreError> {
    match store.get(Collection::ShelfMembers, id).await? {
        Some(doc) => Ok(Some(serde_json::from_value(doc)?)),
        None => Ok(None),
    }
}

pub async fn delete_member(store: &dyn DocumentStore, id: Uuid) -> Result<bool, StoreError> {
    store.delete(Collection::ShelfMembers, id).await
}

pub async fn find_members_by_shelf(
    store: &dyn DocumentStore,
    shelf_id: Uuid,
) -> Result<Vec<ShelfMember>, StoreError> {
    from_docs(store.find(Collection::ShelfMembers, json!({ "shelf_id": shelf_id })).await?)
}

// Shelf-book links

pub async fn create_shelf_book(
    store: &dyn DocumentStore,
    link: &ShelfBook,
) -> Result<(), StoreError> {
    store.insert(Collection::ShelfBooks, link.id, serde_json::to_value(link)?).await
}

pub async fn find_shelf_books(
    store: &dyn DocumentStore,
    shelf_id: Uuid,
) -> Result<Vec<ShelfBook>, StoreError> {
    from_docs(store.find(Collection::ShelfBooks, json!({ "shelf_id": shelf_id })).await?)
}

/// The link record for one (shelf, book) pair, if present
pub async fn find_link(
    store: &dyn DocumentStore,
    shelf_id: Uuid,
    book_id: Uuid,
) -> Result<Option<ShelfBook>, StoreError> {
    let mut links: Vec<ShelfBook> = from_docs(
        store
            .find(Collection::ShelfBooks, json!({ "shelf_id": shelf_id, "book_id": book_id }))
            .await?,
    )?;
    Ok(links.pop())
}

pub async fn delete_shelf_book(store: &dyn DocumentStore, id: Uuid) -> Result<bool, StoreError> {
    store.delete(Collection::ShelfBooks, id).await
}
