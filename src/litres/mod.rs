//! Book Import Adapter (Litres)
//!
//! Imports book metadata from a Litres catalog page in two modes:
//! preview (parse only) and save (parse, then persist under the caller's
//! identity with a `litres` provenance tag).
//!
//! - **`fetch`** - source-domain validation and the `PageFetcher` seam
//! - **`extract`** - fixed-selector HTML extraction (best-effort)
//! - **`handlers`** - the preview and save endpoints
//!
//! Extraction is inherently brittle against upstream HTML changes, so a
//! selector that matches nothing degrades to an empty field with a
//! warning instead of failing the request.

/// Page fetching and source validation
pub mod fetch;

/// Fixed-selector field extraction
pub mod extract;

/// Import endpoints
pub mod handlers;

use thiserror::Error;

use crate::error::ApiError;

/// Errors raised before extraction begins
#[derive(Debug, Error)]
pub enum ImportError {
    /// URL is not on the allowed source domain
    #[error("invalid source URL: {0}")]
    InvalidSource(String),

    /// Network failure while fetching the page
    #[error("{0}")]
    FetchFailed(String),

    /// Upstream answered with a non-success status
    #[error("source returned status {0}")]
    UpstreamStatus(u16),
}

impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::InvalidSource(_) => ApiError::validation(err.to_string()),
            ImportError::FetchFailed(_) | ImportError::UpstreamStatus(_) => {
                ApiError::UpstreamFetch(err.to_string())
            }
        }
    }
}
