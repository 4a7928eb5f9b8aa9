//! HTTP-facing error type and its JSON rendering.

use crate::task::{domain::TaskId, ports::TaskRepositoryError, services::TaskManagerError};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

/// A single rejected input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldViolation {
    /// Offending field, or `body`/`query`/`id` for whole-input failures.
    pub field: String,
    /// Why the value was rejected.
    pub message: String,
}

impl FieldViolation {
    /// Creates a violation for `field`.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Errors surfaced by HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Input failed validation before reaching the task manager.
    #[error("{}", render_violations(.0))]
    Validation(Vec<FieldViolation>),

    /// No task matches the identifier.
    #[error("Task with ID {0} not found")]
    NotFound(TaskId),

    /// Storage failed; details are logged, not returned.
    #[error("internal server error")]
    Internal(#[source] TaskRepositoryError),
}

impl ApiError {
    /// Creates a validation error for a single field.
    #[must_use]
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation(vec![FieldViolation::new(field, message)])
    }

    /// Returns the HTTP status for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<TaskManagerError> for ApiError {
    fn from(err: TaskManagerError) -> Self {
        match err {
            TaskManagerError::NotFound(id) => Self::NotFound(id),
            TaskManagerError::Repository(source) => Self::Internal(source),
        }
    }
}

fn render_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|violation| violation.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// JSON body of every error response.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ErrorBody {
    #[schema(example = 400)]
    status_code: u16,
    #[schema(value_type = String, example = "Bad Request")]
    error: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Vec<FieldViolation>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let Self::Internal(source) = &self {
            error!(error = %source, "request failed in storage");
        }

        let message = self.to_string();
        let details = match self {
            Self::Validation(violations) => Some(violations),
            Self::NotFound(_) | Self::Internal(_) => None,
        };
        let body = ErrorBody {
            status_code: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Error"),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}
