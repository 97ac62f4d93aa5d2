//! Middleware Module
//!
//! Request processing concerns shared across handlers; currently the
//! session/identity resolver.

/// Session/identity resolution
pub mod auth;

// Re-export commonly used types
pub use auth::CurrentUser;
