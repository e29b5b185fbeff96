//! API error types for the projects endpoint
//!
//! Every failure leaves the service as `{"error": {"message": "..."}}` with
//! the status code of its [`ApiErrorKind`].
//!
//! # Example
//!
//! ```rust
//! use projects_service::handlers::{ApiError, ApiErrorKind, ApiOperation};
//!
//! let error = ApiError::not_found(ApiOperation::Delete, 42);
//! assert!(matches!(error.kind, ApiErrorKind::NotFound));
//! assert_eq!(error.message, "Project doesn't exist");
//! ```

use std::fmt;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::projects::ValidationError;
use crate::repository::RepositoryError;

/// Message returned for any id that does not resolve to a project
pub const NOT_FOUND_MESSAGE: &str = "Project doesn't exist";

/// Message returned when storage fails
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Operation being performed when the API error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiOperation {
    /// Listing projects
    List,
    /// Getting a single project by ID
    Get,
    /// Creating a project
    Create,
    /// Partially updating a project
    Update,
    /// Deleting a project
    Delete,
}

impl fmt::Display for ApiOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => write!(f, "list"),
            Self::Get => write!(f, "get"),
            Self::Create => write!(f, "create"),
            Self::Update => write!(f, "update"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Category of API error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// A required create field is missing
    MissingField,
    /// An update carried no updatable field
    NoUpdatableFields,
    /// The request body is not a JSON object
    MalformedBody,
    /// The request body exceeds the configured limit
    PayloadTooLarge,
    /// The project does not exist
    NotFound,
    /// The Data Accessor failed
    Storage,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField => write!(f, "missing_field"),
            Self::NoUpdatableFields => write!(f, "no_updatable_fields"),
            Self::MalformedBody => write!(f, "malformed_body"),
            Self::PayloadTooLarge => write!(f, "payload_too_large"),
            Self::NotFound => write!(f, "not_found"),
            Self::Storage => write!(f, "storage"),
        }
    }
}

impl ApiErrorKind {
    /// Get the HTTP status code for this error kind
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingField | Self::NoUpdatableFields | Self::MalformedBody => {
                StatusCode::BAD_REQUEST
            }
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Storage => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Structured API error with operation context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// The operation being performed when the error occurred
    pub operation: ApiOperation,
    /// The category of error
    pub kind: ApiErrorKind,
    /// Client-facing message
    pub message: String,
    /// The project involved, when known
    pub project_id: Option<String>,
}

impl ApiError {
    /// Create a new API error
    pub fn new(operation: ApiOperation, kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            operation,
            kind,
            message: message.into(),
            project_id: None,
        }
    }

    /// The requested project does not exist
    pub fn not_found(operation: ApiOperation, project_id: impl ToString) -> Self {
        Self {
            operation,
            kind: ApiErrorKind::NotFound,
            message: NOT_FOUND_MESSAGE.to_string(),
            project_id: Some(project_id.to_string()),
        }
    }

    /// A payload failed validation
    pub fn validation(operation: ApiOperation, err: ValidationError) -> Self {
        let kind = match err {
            ValidationError::MissingField(_) => ApiErrorKind::MissingField,
            ValidationError::NoUpdatableFields => ApiErrorKind::NoUpdatableFields,
        };
        Self::new(operation, kind, err.to_string())
    }

    /// The request body could not be read as a JSON object
    ///
    /// A body cut off by the size limit keeps its 413.
    pub fn malformed_body(operation: ApiOperation, rejection: &JsonRejection) -> Self {
        let kind = match rejection {
            JsonRejection::BytesRejection(_)
                if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE =>
            {
                ApiErrorKind::PayloadTooLarge
            }
            _ => ApiErrorKind::MalformedBody,
        };
        Self::new(operation, kind, rejection.body_text())
    }

    /// The Data Accessor failed
    ///
    /// Details are logged here and never returned to the client.
    pub fn storage(operation: ApiOperation, err: RepositoryError) -> Self {
        tracing::error!(
            operation = %operation,
            repository_operation = %err.operation,
            kind = %err.kind,
            project_id = ?err.project_id,
            "Storage error: {}", err.message
        );
        Self::new(operation, ApiErrorKind::Storage, INTERNAL_ERROR_MESSAGE)
    }

    /// Attach the project id involved
    #[must_use]
    pub fn with_project_id(mut self, project_id: impl ToString) -> Self {
        self.project_id = Some(project_id.to_string());
        self
    }

    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        self.kind.status_code()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "API {} error during {}: {}",
            self.kind, self.operation, self.message
        )?;
        if let Some(ref id) = self.project_id {
            write!(f, " [project: {}]", id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Error response body: `{"error": {"message": "..."}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Inner error object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                message: message.into(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_client_error() {
            tracing::debug!(
                operation = %self.operation,
                kind = %self.kind,
                project_id = ?self.project_id,
                "Rejected request: {}", self.message
            );
        }
        (status, Json(ErrorResponse::new(self.message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{RepositoryErrorKind, RepositoryOperation};
    use axum::{body::Body, extract::FromRequest, http::Request};

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiErrorKind::MissingField.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiErrorKind::NoUpdatableFields.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiErrorKind::MalformedBody.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiErrorKind::PayloadTooLarge.status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(ApiErrorKind::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiErrorKind::Storage.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_is_independent_of_operation() {
        for operation in [ApiOperation::Get, ApiOperation::Update, ApiOperation::Delete] {
            let err = ApiError::not_found(operation, 123456);
            assert_eq!(err.kind, ApiErrorKind::NotFound);
            assert_eq!(err.message, NOT_FOUND_MESSAGE);
            assert_eq!(err.project_id.as_deref(), Some("123456"));
        }
    }

    #[test]
    fn test_validation_error_mapping() {
        let err = ApiError::validation(
            ApiOperation::Create,
            ValidationError::MissingField("project_name"),
        );
        assert_eq!(err.kind, ApiErrorKind::MissingField);
        assert_eq!(err.message, "Missing 'project_name' in request body");

        let err = ApiError::validation(ApiOperation::Update, ValidationError::NoUpdatableFields);
        assert_eq!(err.kind, ApiErrorKind::NoUpdatableFields);
    }

    #[test]
    fn test_storage_error_hides_details() {
        let repo_err = RepositoryError::new(
            RepositoryOperation::List,
            RepositoryErrorKind::ConnectionFailed,
            "connection refused (os error 111)",
        );
        let err = ApiError::storage(ApiOperation::List, repo_err);
        assert_eq!(err.kind, ApiErrorKind::Storage);
        assert_eq!(err.message, INTERNAL_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_body_over_limit_keeps_413() {
        // No DefaultBodyLimit layer, so the extractor's 2 MB default applies.
        let oversized = format!(r#"{{"content":"{}"}}"#, "x".repeat(3 * 1024 * 1024));
        let request = Request::builder()
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(oversized))
            .unwrap();

        let rejection = Json::<serde_json::Value>::from_request(request, &())
            .await
            .unwrap_err();
        let err = ApiError::malformed_body(ApiOperation::Create, &rejection);

        assert_eq!(err.kind, ApiErrorKind::PayloadTooLarge);
        assert_eq!(err.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_syntax_error_is_malformed_body() {
        let request = Request::builder()
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"project_name": "#))
            .unwrap();

        let rejection = Json::<serde_json::Value>::from_request(request, &())
            .await
            .unwrap_err();
        let err = ApiError::malformed_body(ApiOperation::Create, &rejection);

        assert_eq!(err.kind, ApiErrorKind::MalformedBody);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_error_body_shape() {
        let body = serde_json::to_value(ErrorResponse::new(NOT_FOUND_MESSAGE)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "error": { "message": "Project doesn't exist" } })
        );
    }

    #[test]
    fn test_display() {
        let err = ApiError::not_found(ApiOperation::Get, 7);
        assert_eq!(
            err.to_string(),
            "API not_found error during get: Project doesn't exist [project: 7]"
        );
    }
}
