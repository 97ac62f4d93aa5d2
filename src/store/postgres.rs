/**
 * Postgres Document Store
 *
 * JSONB-backed implementation of `DocumentStore`. Each logical collection
 * maps to one table of `(id UUID, doc JSONB)` rows; equality-filtered
 * scans use JSONB containment (`doc @> filter`), which is served by the
 * GIN indexes created in the migrations.
 *
 * # Lifecycle
 *
 * The pool is created once at startup (see `server::config`) and shared
 * for the process lifetime. Migrations run before the store is handed to
 * the router.
 */

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use crate::store::document::{Collection, DocumentStore, StoreError};

/// Postgres-backed document store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Wrap an existing connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Access the underlying pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl DocumentStore for PgStore {
    async fn insert(&self, collection: Collection, id: Uuid, doc: Value) -> Result<(), StoreError> {
        let sql = format!("INSERT INTO {} (id, doc) VALUES ($1, $2)", collection.table());
        sqlx::query(&sql)
            .bind(id)
            .bind(doc)
            .execute(&self.pool)
            .await
            .map_err(StoreError::from_insert)?;
        Ok(())
    }

    async fn get(&self, collection: Collection, id: Uuid) -> Result<Option<Value>, StoreError> {
        let sql = format!("SELECT doc FROM {} WHERE id = $1", collection.table());
        let doc = sqlx::query_scalar::<_, Value>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(doc)
    }

    async fn update(
        &self,
        collection: Collection,
        id: Uuid,
        patch: Value,
    ) -> Result<bool, StoreError> {
        let sql = format!("UPDATE {} SET doc = doc || $2 WHERE id = $1", collection.table());
        let result = sqlx::query(&sql).bind(id).bind(patch).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, collection: Collection, id: Uuid) -> Result<bool, StoreError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", collection.table());
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn find(&self, collection: Collection, filter: Value) -> Result<Vec<Value>, StoreError> {
        let sql = format!("SELECT doc FROM {} WHERE doc @> $1", collection.table());
        let docs = sqlx::query_scalar::<_, Value>(&sql)
            .bind(filter)
            .fetch_all(&self.pool)
            .await?;
        Ok(docs)
    }

    async fn list(&self, collection: Collection) -> Result<Vec<Value>, StoreError> {
        let sql = format!("SELECT doc FROM {}", collection.table());
        let docs = sqlx::query_scalar::<_, Value>(&sql).fetch_all(&self.pool).await?;
        Ok(docs)
    }
}
