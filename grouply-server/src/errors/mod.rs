pub mod api;
pub mod group;
pub mod member;

pub use api::ApiError;
pub use group::GroupError;
pub use member::MemberError;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use uuid::Uuid;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Extract status code, error message and failure details from the specific error type
        let (status, error_message, details) = match self {
            ApiError::GroupError(e) => (e.status_code(), e.to_string(), None),
            ApiError::MemberError(e) => (e.status_code(), e.to_string(), None),
            ApiError::DatabaseError(e) => {
                let error_id = Uuid::new_v4();
                tracing::error!(error_id = ?error_id, "Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                    Some(e.to_string()),
                )
            }
            ApiError::InternalError(e) => {
                let error_id = Uuid::new_v4();
                tracing::error!(error_id = ?error_id, "Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    Some(e.to_string()),
                )
            }
        };

        let mut error_obj = json!({
            "error": error_message
        });

        // Store failures carry the underlying error description
        if let Some(details) = details {
            error_obj["details"] = json!(details);
        }

        (status, Json(error_obj)).into_response()
    }
}
