//! WebShelf - Main Library
//!
//! WebShelf is a REST backend for managing books, personal and shared
//! shelves, and user accounts, backed by a document database.
//!
//! # Overview
//!
//! - Username/password authentication with bearer-token or cookie
//!   sessions (bcrypt + signed JWTs, server-side revocation on logout)
//! - Ownership and visibility policy for shelves, memberships, and
//!   shelf-book links
//! - Book import from the Litres catalog via fixed-selector HTML
//!   extraction
//!
//! # Module Structure
//!
//! - **`server`** - configuration, application state, initialization
//! - **`routes`** - route configuration and router assembly
//! - **`store`** - document store abstraction (Postgres JSONB, in-memory)
//! - **`auth`** - credentials, session tokens, users, auth handlers
//! - **`middleware`** - session/identity resolution
//! - **`policy`** - pure ownership/visibility predicates
//! - **`books`**, **`shelves`**, **`users`** - resource handlers
//! - **`litres`** - book import adapter
//! - **`error`** - API error taxonomy
//!
//! # State Management
//!
//! All shared state lives in `server::state::AppState`: the document
//! store handle (`Arc<dyn DocumentStore>`), the page fetcher for the
//! import adapter, and the auth settings. Everything is constructed at
//! startup and dependency-injected; there is no global state.

/// Authentication and user management
pub mod auth;

/// Book resources
pub mod books;

/// API error types
pub mod error;

/// Litres book import adapter
pub mod litres;

/// Request middleware
pub mod middleware;

/// Ownership and visibility policy
pub mod policy;

/// Route configuration
pub mod routes;

/// Server setup and configuration
pub mod server;

/// Shelf resources
pub mod shelves;

/// Document store
pub mod store;

/// User self-service resources
pub mod users;

// Re-export commonly used types
pub use error::ApiError;
pub use routes::create_router;
pub use server::{AppConfig, AppState, AuthConfig};
pub use store::{DocumentStore, MemoryStore, PgStore};
