//! Authentication Module
//!
//! Credential verification, session tokens, the user repository, and the
//! auth HTTP handlers.
//!
//! # Architecture
//!
//! - **`credentials`** - bcrypt password hashing and verification
//! - **`tokens`** - JWT issuance and validation
//! - **`users`** - User model and document store operations
//! - **`handlers`** - register / login / logout endpoints
//!
//! Session resolution for inbound requests lives in
//! `middleware::auth`, which combines `tokens` validation with a user
//! lookup and a stored-token cross-check.

/// Password hashing and verification
pub mod credentials;

/// JWT session tokens
pub mod tokens;

/// User model and repository
pub mod users;

/// HTTP handlers
pub mod handlers;
