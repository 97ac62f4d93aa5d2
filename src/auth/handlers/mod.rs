//! Auth HTTP Handlers
//!
//! - `POST /api/register` - create an account
//! - `POST /api/login` - verify credentials, issue a session token
//! - `POST /api/logout` - revoke the active session token

/// Request/response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

// Re-export handlers for route configuration
pub use login::login;
pub use logout::logout;
pub use register::register;
