//! Users Module
//!
//! Self-service profile and per-user listing handlers. The user model
//! and repository live in `auth::users`.

/// HTTP handlers
pub mod handlers;
