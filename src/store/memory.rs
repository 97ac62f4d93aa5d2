/**
 * In-Memory Document Store
 *
 * HashMap-backed implementation of `DocumentStore` with the same
 * semantics as `PgStore`: per-document atomicity and top-level equality
 * filtering. Used by the integration test suite so handlers run against
 * the real router without a live database.
 */

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::store::document::{Collection, DocumentStore, StoreError};

/// In-process document store
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<Collection, HashMap<Uuid, Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Top-level containment check matching Postgres `doc @> filter` for flat
/// filter objects
fn matches(doc: &Value, filter: &Value) -> bool {
    match (doc.as_object(), filter.as_object()) {
        (Some(doc), Some(filter)) => filter.iter().all(|(k, v)| doc.get(k) == Some(v)),
        _ => false,
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(&self, collection: Collection, id: Uuid, doc: Value) -> Result<(), StoreError> {
        let mut collections = self.collections.write().expect("store lock poisoned");
        let docs = collections.entry(collection).or_default();
        if docs.contains_key(&id) {
            return Err(StoreError::UniqueViolation);
        }
        docs.insert(id, doc);
        Ok(())
    }

    async fn get(&self, collection: Collection, id: Uuid) -> Result<Option<Value>, StoreError> {
        let collections = self.collections.read().expect("store lock poisoned");
        Ok(collections.get(&collection).and_then(|docs| docs.get(&id)).cloned())
    }

    async fn update(
        &self,
        collection: Collection,
        id: Uuid,
        patch: Value,
    ) -> Result<bool, StoreError> {
        let mut collections = self.collections.write().expect("store lock poisoned");
        let doc = match collections.get_mut(&collection).and_then(|docs| docs.get_mut(&id)) {
            Some(doc) => doc,
            None => return Ok(false),
        };
        if let (Some(doc), Some(patch)) = (doc.as_object_mut(), patch.as_object()) {
            for (key, value) in patch {
                doc.insert(key.clone(), value.clone());
            }
        }
        Ok(true)
    }

    async fn delete(&self, collection: Collection, id: Uuid) -> Result<bool, StoreError> {
        let mut collections = self.collections.write().expect("store lock poisoned");
        Ok(collections
            .get_mut(&collection)
            .map(|docs| docs.remove(&id).is_some())
            .unwrap_or(false))
    }

    async fn find(&self, collection: Collection, filter: Value) -> Result<Vec<Value>, StoreError> {
        let collections = self.collections.read().expect("store lock poisoned");
        Ok(collections
            .get(&collection)
            .map(|docs| docs.values().filter(|doc| matches(doc, &filter)).cloned().collect())
            .unwrap_or_default())
    }

    async fn list(&self, collection: Collection) -> Result<Vec<Value>, StoreError> {
        let collections = self.collections.read().expect("store lock poisoned");
        Ok(collections
            .get(&collection)
            .map(|docs| docs.values().cloned().collect())
            .unwrap_or_default())
    }
}
