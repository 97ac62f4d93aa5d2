//! Books Module
//!
//! Book model, repository, and HTTP handlers.

/// Book model and document store operations
pub mod db;

/// HTTP handlers
pub mod handlers;
