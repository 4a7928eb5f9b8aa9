//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task name is empty after trimming.
    #[error("task name must not be empty")]
    EmptyName,

    /// The task name does not fit the persisted column.
    #[error("task name must not exceed {max} characters")]
    NameTooLong {
        /// Maximum accepted length in characters.
        max: usize,
    },

    /// The identifier is not a positive storage key.
    #[error("invalid task identifier {0}, expected a positive integer")]
    InvalidTaskId(i64),

    /// The due date is not an ISO-8601 date or date-time.
    #[error("invalid due date '{0}', expected an ISO-8601 date-time string")]
    InvalidDueDate(String),

    /// The requested page number is zero.
    #[error("page must be a positive integer")]
    InvalidPage,

    /// The requested page size is zero.
    #[error("limit must be a positive integer")]
    InvalidLimit,
}

/// Error returned while parsing task statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status '{0}', expected one of: pending, in_progress, completed, cancelled")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task priorities.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority '{0}', expected one of: low, normal, high")]
pub struct ParseTaskPriorityError(pub String);
