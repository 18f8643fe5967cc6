//! API error types and handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use taskboard_domain::DomainError;
use thiserror::Error;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    /// Credentials or token rejected
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Authenticated but not allowed
    #[error("Authorization failed: {0}")]
    Authorization(String),

    /// Task lookup failed
    #[error("Task not found: {0}")]
    TaskNotFound(String),

    /// Request payload rejected
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Resource already exists
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Unexpected failure
    #[error("Internal server error: {0}")]
    Internal(String),

    /// Domain rule rejected the operation
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::Authentication(_) => (StatusCode::UNAUTHORIZED, "authentication_error"),
            ApiError::Authorization(_) => (StatusCode::FORBIDDEN, "authorization_error"),
            ApiError::TaskNotFound(_) => (StatusCode::NOT_FOUND, "task_not_found"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "conflict"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
            ApiError::Domain(err) => match err {
                DomainError::EntityNotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
                DomainError::ValidationError { .. } => (StatusCode::BAD_REQUEST, "validation_error"),
                DomainError::DuplicateEntity { .. } => (StatusCode::CONFLICT, "duplicate_entity"),
                DomainError::BusinessRuleViolation { .. } => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
                }
            },
            ApiError::Json(_) => (StatusCode::BAD_REQUEST, "json_error"),
        };

        let body = Json(json!({
            "error": {
                "type": error_type,
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_not_found_maps_to_404() {
        let err = ApiError::Domain(DomainError::not_found("Task", "abc"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let err = ApiError::Domain(DomainError::validation("title", "must not be empty"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_conflict_maps_to_409() {
        let err = ApiError::Conflict("username taken".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
