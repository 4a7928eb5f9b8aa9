//! Boundary validation turning wire payloads into typed service input.
//!
//! Every field is checked and all violations are reported together.

use super::dto::{CreateTaskPayload, ListTasksParams, UpdateTaskPayload};
use super::error::{ApiError, FieldViolation};
use crate::task::domain::{
    PageRequest, TaskDomainError, TaskFilter, TaskId, TaskName, TaskPatch, TaskPriority, TaskStatus,
    parse_due_date,
};
use crate::task::services::CreateTaskRequest;
use std::fmt::Display;

/// Collects field violations while a payload is converted.
#[derive(Debug, Default)]
struct Violations(Vec<FieldViolation>);

impl Violations {
    fn check<T, E: Display>(&mut self, field: &str, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.reject(field, &err);
                None
            }
        }
    }

    fn reject(&mut self, field: &str, err: &impl Display) {
        self.0.push(FieldViolation::new(field, err.to_string()));
    }

    fn require<T>(&mut self, field: &str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.0
                .push(FieldViolation::new(field, format!("{field} is required")));
        }
        value
    }

    fn finish<T>(self, value: Option<T>) -> Result<T, ApiError> {
        match value {
            Some(converted) if self.0.is_empty() => Ok(converted),
            _ => Err(ApiError::Validation(self.0)),
        }
    }
}

/// Validates a create payload.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] listing every rejected field.
pub fn validate_create(payload: CreateTaskPayload) -> Result<CreateTaskRequest, ApiError> {
    let mut violations = Violations::default();

    let valid_name = violations
        .require("name", payload.name)
        .and_then(|raw| violations.check("name", TaskName::new(raw)));
    let valid_due_date = violations
        .require("dueDate", payload.due_date)
        .and_then(|raw| violations.check("dueDate", parse_due_date(&raw)));
    let valid_priority = violations
        .require("priority", payload.priority)
        .and_then(|raw| violations.check("priority", TaskPriority::try_from(raw.as_str())));
    let valid_status = payload
        .status
        .and_then(|raw| violations.check("status", TaskStatus::try_from(raw.as_str())));

    let request = match (valid_name, valid_due_date, valid_priority) {
        (Some(name), Some(due_date), Some(priority)) => {
            let mut built = CreateTaskRequest::new(name, due_date, priority);
            if let Some(status) = valid_status {
                built = built.with_status(status);
            }
            if let Some(is_active) = payload.is_active {
                built = built.with_active(is_active);
            }
            Some(built)
        }
        _ => None,
    };
    violations.finish(request)
}

/// Validates an update payload; absent fields stay absent in the patch.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] listing every rejected field.
pub fn validate_update(payload: UpdateTaskPayload) -> Result<TaskPatch, ApiError> {
    let mut violations = Violations::default();
    let mut patch = TaskPatch::new();

    if let Some(name) = payload
        .name
        .and_then(|raw| violations.check("name", TaskName::new(raw)))
    {
        patch = patch.with_name(name);
    }
    if let Some(due_date) = payload
        .due_date
        .and_then(|raw| violations.check("dueDate", parse_due_date(&raw)))
    {
        patch = patch.with_due_date(due_date);
    }
    if let Some(status) = payload
        .status
        .and_then(|raw| violations.check("status", TaskStatus::try_from(raw.as_str())))
    {
        patch = patch.with_status(status);
    }
    if let Some(priority) = payload
        .priority
        .and_then(|raw| violations.check("priority", TaskPriority::try_from(raw.as_str())))
    {
        patch = patch.with_priority(priority);
    }
    if let Some(is_active) = payload.is_active {
        patch = patch.with_active(is_active);
    }

    violations.finish(Some(patch))
}

/// Validates listing parameters into a filter and page window.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] listing every rejected parameter.
pub fn validate_list(params: ListTasksParams) -> Result<(TaskFilter, PageRequest), ApiError> {
    let mut violations = Violations::default();
    let mut filter = TaskFilter::new();

    if let Some(status) = params
        .status
        .and_then(|raw| violations.check("status", TaskStatus::try_from(raw.as_str())))
    {
        filter = filter.with_status(status);
    }
    if let Some(priority) = params
        .priority
        .and_then(|raw| violations.check("priority", TaskPriority::try_from(raw.as_str())))
    {
        filter = filter.with_priority(priority);
    }
    if let Some(is_active) = params.is_active {
        filter = filter.with_active(is_active);
    }

    if params.page == Some(0) {
        violations.reject("page", &TaskDomainError::InvalidPage);
    }
    if params.limit == Some(0) {
        violations.reject("limit", &TaskDomainError::InvalidLimit);
    }
    let page = PageRequest::new(params.page, params.limit).ok();

    violations.finish(page.map(|window| (filter, window)))
}

/// Validates a path identifier.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] when the value is not a positive storage
/// key.
pub fn validate_id(raw: i64) -> Result<TaskId, ApiError> {
    TaskId::new(raw).map_err(|err| ApiError::invalid("id", err.to_string()))
}
