//! Shelves Module
//!
//! Shelf, membership, and shelf-book models, repository, and handlers.

/// Models and document store operations
pub mod db;

/// HTTP handlers
pub mod handlers;
