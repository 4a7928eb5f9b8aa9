//! Wire shapes for requests and response envelopes.
//!
//! Request payloads keep enum and date fields as raw strings;
//! [`validation`](super::validation) converts them and reports every field
//! violation together.

use crate::task::domain::{Task, TaskPriority, TaskStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Body of `POST /tasks`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskPayload {
    /// Task name; required and non-empty.
    #[schema(example = "Write quarterly report")]
    pub name: Option<String>,
    /// ISO-8601 due date; required.
    #[schema(example = "2030-01-15T09:30:00Z")]
    pub due_date: Option<String>,
    /// Initial status; defaults to `pending`.
    #[schema(example = "pending")]
    pub status: Option<String>,
    /// Priority; required.
    #[schema(example = "high")]
    pub priority: Option<String>,
    /// Active flag; defaults to `true`.
    pub is_active: Option<bool>,
}

/// Body of `PATCH /tasks/{id}`; every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskPayload {
    /// Replacement name.
    pub name: Option<String>,
    /// Replacement ISO-8601 due date.
    pub due_date: Option<String>,
    /// Replacement status.
    pub status: Option<String>,
    /// Replacement priority.
    pub priority: Option<String>,
    /// Replacement active flag.
    pub is_active: Option<bool>,
}

/// Query string of `GET /tasks`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListTasksParams {
    /// One-based page number.
    pub page: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
    /// Status filter.
    pub status: Option<String>,
    /// Priority filter.
    pub priority: Option<String>,
    /// Active-flag filter.
    pub is_active: Option<bool>,
}

/// Task as rendered on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskView {
    /// Storage-assigned identifier.
    #[schema(example = 1)]
    pub id: i32,
    /// Task name.
    pub name: String,
    /// Due date.
    pub due_date: DateTime<Utc>,
    /// Workflow status: `pending`, `in_progress`, `completed` or `cancelled`.
    #[schema(value_type = String, example = "in_progress")]
    pub status: TaskStatus,
    /// Priority: `low`, `normal` or `high`.
    #[schema(value_type = String, example = "normal")]
    pub priority: TaskPriority,
    /// Active flag.
    pub is_active: bool,
    /// Creation timestamp.
    pub date_of_creation: DateTime<Utc>,
}

impl From<&Task> for TaskView {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().value(),
            name: task.name().as_str().to_owned(),
            due_date: task.due_date(),
            status: task.status(),
            priority: task.priority(),
            is_active: task.is_active(),
            date_of_creation: task.date_of_creation(),
        }
    }
}

/// `{message, data}` envelope carrying one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct TaskEnvelope {
    /// Human-readable outcome.
    #[schema(value_type = String, example = "Task fetched successfully")]
    pub message: &'static str,
    /// The affected task.
    pub data: TaskView,
}

impl TaskEnvelope {
    /// Wraps a task under `message`.
    #[must_use]
    pub fn new(message: &'static str, task: &Task) -> Self {
        Self {
            message,
            data: TaskView::from(task),
        }
    }
}

/// `{message}` envelope for operations without a payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MessageEnvelope {
    /// Human-readable outcome.
    #[schema(value_type = String, example = "Task deleted successfully")]
    pub message: &'static str,
}

/// `{message, data, count, totalPages}` listing envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageEnvelope {
    /// Human-readable outcome.
    #[schema(value_type = String, example = "Tasks fetched successfully")]
    pub message: &'static str,
    /// Tasks on the requested page.
    pub data: Vec<TaskView>,
    /// Number of tasks matching the filter across all pages.
    pub count: u64,
    /// Number of pages at the effective page size.
    pub total_pages: u64,
}

/// Liveness check body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct HealthView {
    /// Always `"ok"` while the process serves requests.
    #[schema(value_type = String, example = "ok")]
    pub status: &'static str,
}
