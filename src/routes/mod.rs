//! Routes Module
//!
//! HTTP route configuration and router assembly.

/// API route definitions
pub mod api_routes;

/// Router assembly
pub mod router;

// Re-export commonly used functions
pub use router::create_router;
