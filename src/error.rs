use axum::{Json, http::StatusCode, response::IntoResponse};
use thiserror::Error;

/// ApiError
///
/// The complete failure taxonomy for this API. Every handler returns
/// `Result<_, ApiError>`, and every failure flows through the single
/// `IntoResponse` terminal below, which maps each kind to its HTTP status.
///
/// Ordering contract: `NotFound` must be classified before `Forbidden` on any
/// id-based operation, so that probing an unknown id never reveals (via 403)
/// that a resource exists but belongs to someone else.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or invalid bearer credential. Raised by the AuthUser extractor
    /// before any store access occurs.
    #[error("invalid or missing credentials")]
    Unauthorized,

    /// The requested id does not resolve to any document. Deliberately carries
    /// no detail: a deleted resource and one that never existed are
    /// indistinguishable to the client.
    #[error("not found")]
    NotFound,

    /// The authenticated principal is not the resource owner.
    #[error("forbidden")]
    Forbidden,

    /// A store-level field constraint was violated (blank required field,
    /// out-of-range rating, duplicate title). The store's message is surfaced.
    #[error("{0}")]
    Validation(String),

    /// Unexpected store-layer failure. Logged server-side, surfaced as a
    /// generic message.
    #[error("internal server error")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "invalid or missing credentials".to_string(),
            ),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "not found".to_string()),
            ApiError::Forbidden => (StatusCode::FORBIDDEN, "forbidden".to_string()),
            ApiError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::Internal(msg) => {
                // Keep the detail out of the response body.
                tracing::error!("internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };
        let body = serde_json::json!({ "error": message });
        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    /// Classifies driver errors at the store boundary. Constraint violations
    /// (unique, check, not-null) are the store's field validation and become
    /// client-visible `Validation` failures; anything else is `Internal`.
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            match db_err.code().as_deref() {
                // 23505 unique_violation, 23514 check_violation, 23502 not_null_violation
                Some("23505") | Some("23514") | Some("23502") => {
                    return ApiError::Validation(db_err.message().to_string());
                }
                _ => {}
            }
        }
        ApiError::Internal(err.to_string())
    }
}

/// require_found
///
/// The absence classifier: collapses the result of a lookup-by-id into either
/// the document or `NotFound`. Must run immediately after every id-based
/// fetch, strictly before any ownership check.
pub fn require_found<T>(found: Option<T>) -> Result<T, ApiError> {
    found.ok_or(ApiError::NotFound)
}
