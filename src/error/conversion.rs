/**
 * Error Conversion
 *
 * `IntoResponse` for `ApiError`, so handlers can return errors directly.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Shelf not found",
 *   "status": 404
 * }
 * ```
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("request failed: {}", self);
        } else {
            tracing::warn!("request rejected ({}): {}", status.as_u16(), self);
        }

        let body = Json(serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
