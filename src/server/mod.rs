//! Server Module
//!
//! Server configuration, application state, and initialization.
//!
//! - **`config`** - environment configuration and store connection
//! - **`state`** - `AppState` and `FromRef` implementations
//! - **`init`** - app creation

/// Configuration loading
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::AppConfig;
pub use init::create_app;
pub use state::{AppState, AuthConfig};
