/**
 * API Error Types
 *
 * This module defines the error taxonomy shared by every handler.
 * Each variant maps to one stable HTTP status code; handlers return
 * `Result<_, ApiError>` and rely on the `IntoResponse` conversion.
 *
 * # Ordering
 *
 * Handlers surface errors in a uniform order: malformed input, missing
 * auth, resource not found, forbidden, persistence failure. NotFound
 * always takes precedence over Forbidden for a missing resource.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::store::StoreError;

/// Errors surfaced to API callers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing input (400)
    #[error("{0}")]
    Validation(String),

    /// Missing, invalid, expired, or revoked credentials (401)
    #[error("{0}")]
    Unauthenticated(String),

    /// Authenticated but not permitted (403)
    #[error("{0}")]
    Forbidden(String),

    /// Referenced resource does not exist (404)
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Duplicate resource, currently only usernames (409)
    #[error("{0}")]
    Conflict(String),

    /// Import source unreachable or returned a non-success status (502)
    #[error("upstream fetch failed: {0}")]
    UpstreamFetch(String),

    /// Document store read/write failure (500)
    #[error("persistence failure: {0}")]
    Persistence(#[from] StoreError),

    /// Server-side failure unrelated to the caller's input (500)
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::UpstreamFetch(_) => StatusCode::BAD_GATEWAY,
            Self::Persistence(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(ApiError::validation("x").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::unauthenticated("x").status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::forbidden("x").status_code(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::NotFound("Shelf").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::conflict("x").status_code(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::UpstreamFetch("timeout".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError::internal("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(ApiError::NotFound("Shelf").to_string(), "Shelf not found");
    }
}
