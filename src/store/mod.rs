//! Document Store Module
//!
//! This module provides the document database abstraction used by every
//! resource handler. Documents are schemaless JSON objects addressed by
//! generated UUIDs and grouped into a fixed set of logical collections.
//!
//! # Architecture
//!
//! - **`document`** - The `DocumentStore` trait, collection names, and store errors
//! - **`postgres`** - `PgStore`, a Postgres JSONB-backed implementation
//! - **`memory`** - `MemoryStore`, an in-process implementation used in tests
//!
//! The store handle is constructed once at startup and dependency-injected
//! through `AppState`; no module-level globals.

/// Store trait and error types
pub mod document;

/// In-memory store implementation
pub mod memory;

/// Postgres JSONB store implementation
pub mod postgres;

// Re-export commonly used types
pub use document::{Collection, DocumentStore, StoreError};
pub use memory::MemoryStore;
pub use postgres::PgStore;
