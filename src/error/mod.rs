//! Error Module
//!
//! Error taxonomy for the API surface and its HTTP conversion.
//!
//! - **`types`** - `ApiError` variants and status code mapping
//! - **`conversion`** - `IntoResponse` implementation
//!
//! Every failure returns a structured JSON error body with a stable
//! status code; nothing is retried internally.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
