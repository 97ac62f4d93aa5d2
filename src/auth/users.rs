/**
 * User Model and Repository
 *
 * User documents live in the `users` collection. The stored document
 * carries its own `id` field, so lookups deserialize straight into
 * `User`. The `token` field holds the currently valid session token and
 * is cleared on logout.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::store::{Collection, DocumentStore, StoreError};

/// User document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID
    pub id: Uuid,
    /// Username (unique)
    pub username: String,
    /// Salted password hash (bcrypt)
    pub password: String,
    /// Optional external contact handle
    #[serde(default)]
    pub telegram_contact: Option<String>,
    /// Currently valid session token, if any
    #[serde(default)]
    pub token: Option<String>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Build a new user with a generated id and creation timestamp
    pub fn new(username: String, password_hash: String, telegram_contact: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            password: password_hash,
            telegram_contact,
            token: None,
            created_at: Utc::now(),
        }
    }
}

/// Persist a new user
pub async fn create_user(store: &dyn DocumentStore, user: &User) -> Result<(), StoreError> {
    store.insert(Collection::Users, user.id, serde_json::to_value(user)?).await
}

/// Look up a user by id
pub async fn get_user_by_id(
    store: &dyn DocumentStore,
    id: Uuid,
) -> Result<Option<User>, StoreError> {
    match store.get(Collection::Users, id).await? {
        Some(doc) => Ok(Some(serde_json::from_value(doc)?)),
        None => Ok(None),
    }
}

/// Look up a user by username
pub async fn get_user_by_username(
    store: &dyn DocumentStore,
    username: &str,
) -> Result<Option<User>, StoreError> {
    let mut docs = store.find(Collection::Users, json!({ "username": username })).await?;
    match docs.pop() {
        Some(doc) => Ok(Some(serde_json::from_value(doc)?)),
        None => Ok(None),
    }
}

/// Store the active session token on the user document
pub async fn set_session_token(
    store: &dyn DocumentStore,
    user_id: Uuid,
    token: &str,
) -> Result<bool, StoreError> {
    store.update(Collection::Users, user_id, json!({ "token": token })).await
}

/// Clear the active session token, revoking it server-side
pub async fn clear_session_token(
    store: &dyn DocumentStore,
    user_id: Uuid,
) -> Result<bool, StoreError> {
    store.update(Collection::Users, user_id, json!({ "token": null })).await
}

/// Apply a partial profile update (fields already filtered by the handler)
pub async fn update_profile(
    store: &dyn DocumentStore,
    user_id: Uuid,
    patch: serde_json::Value,
) -> Result<bool, StoreError> {
    store.update(Collection::Users, user_id, patch).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn test_create_and_get_by_username() {
        let store = MemoryStore::new();
        let user = User::new("alice".into(), "digest".into(), None);
        create_user(&store, &user).await.unwrap();

        let found = get_user_by_username(&store, "alice").await.unwrap().unwrap();
        assert_eq!(found.id, user.id);
        assert_eq!(found.username, "alice");
        assert!(found.token.is_none());

        assert!(get_user_by_username(&store, "bob").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_session_token_lifecycle() {
        let store = MemoryStore::new();
        let user = User::new("alice".into(), "digest".into(), None);
        create_user(&store, &user).await.unwrap();

        set_session_token(&store, user.id, "tok-1").await.unwrap();
        let found = get_user_by_id(&store, user.id).await.unwrap().unwrap();
        assert_eq!(found.token.as_deref(), Some("tok-1"));

        clear_session_token(&store, user.id).await.unwrap();
        let found = get_user_by_id(&store, user.id).await.unwrap().unwrap();
        assert!(found.token.is_none());
    }
}
