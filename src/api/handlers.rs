//! Request handlers for the task endpoints.

use super::dto::{
    CreateTaskPayload, HealthView, ListTasksParams, MessageEnvelope, PageEnvelope, TaskEnvelope,
    TaskView, UpdateTaskPayload,
};
use super::error::{ApiError, ErrorBody};
use super::state::AppState;
use super::validation::{validate_create, validate_id, validate_list, validate_update};
use crate::task::domain::TaskId;
use crate::task::ports::TaskRepository;
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use mockable::Clock;

type ApiResult<T> = Result<T, ApiError>;

/// `GET /health`.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is up", body = HealthView))
)]
#[expect(clippy::unused_async, reason = "axum handlers must be async")]
pub async fn health() -> Json<HealthView> {
    Json(HealthView { status: "ok" })
}

/// `POST /tasks`.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] for a malformed or invalid body and
/// [`ApiError::Internal`] when storage fails.
#[utoipa::path(
    post,
    path = "/tasks",
    tag = "tasks",
    request_body = CreateTaskPayload,
    responses(
        (status = 201, description = "Task created", body = TaskEnvelope),
        (status = 400, description = "Malformed or invalid body", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn create_task<R, C>(
    State(state): State<AppState<R, C>>,
    payload: Result<Json<CreateTaskPayload>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<TaskEnvelope>)>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Json(body) = payload.map_err(|rejection| ApiError::invalid("body", rejection.body_text()))?;
    let request = validate_create(body)?;
    let task = state.manager.create(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(TaskEnvelope::new("Task created successfully", &task)),
    ))
}

/// `GET /tasks`.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] for unusable query parameters and
/// [`ApiError::Internal`] when storage fails.
#[utoipa::path(
    get,
    path = "/tasks",
    tag = "tasks",
    params(ListTasksParams),
    responses(
        (status = 200, description = "One page of matching tasks", body = PageEnvelope),
        (status = 400, description = "Unusable query parameters", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn list_tasks<R, C>(
    State(state): State<AppState<R, C>>,
    params: Result<Query<ListTasksParams>, QueryRejection>,
) -> ApiResult<Json<PageEnvelope>>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Query(raw) = params.map_err(|rejection| ApiError::invalid("query", rejection.body_text()))?;
    let (filter, window) = validate_list(raw)?;
    let page = state.manager.list(filter, window).await?;
    Ok(Json(PageEnvelope {
        message: "Tasks fetched successfully",
        data: page.tasks.iter().map(TaskView::from).collect(),
        count: page.total,
        total_pages: window.total_pages(page.total),
    }))
}

/// `GET /tasks/{id}`.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] when no task has the identifier.
#[utoipa::path(
    get,
    path = "/tasks/{id}",
    tag = "tasks",
    params(("id" = i64, Path, description = "Task identifier")),
    responses(
        (status = 200, description = "The task", body = TaskEnvelope),
        (status = 400, description = "Unusable identifier", body = ErrorBody),
        (status = 404, description = "No task has the identifier", body = ErrorBody)
    )
)]
pub async fn get_task<R, C>(
    State(state): State<AppState<R, C>>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<TaskEnvelope>>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let task_id = path_id(id)?;
    let task = state
        .manager
        .find_one(task_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(task_id))?;
    Ok(Json(TaskEnvelope::new("Task fetched successfully", &task)))
}

/// `PATCH /tasks/{id}`.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] for an invalid body and
/// [`ApiError::NotFound`] when no task has the identifier.
#[utoipa::path(
    patch,
    path = "/tasks/{id}",
    tag = "tasks",
    params(("id" = i64, Path, description = "Task identifier")),
    request_body = UpdateTaskPayload,
    responses(
        (status = 200, description = "Task updated", body = TaskEnvelope),
        (status = 400, description = "Unusable identifier or invalid body", body = ErrorBody),
        (status = 404, description = "No task has the identifier", body = ErrorBody)
    )
)]
pub async fn update_task<R, C>(
    State(state): State<AppState<R, C>>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateTaskPayload>, JsonRejection>,
) -> ApiResult<Json<TaskEnvelope>>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let task_id = path_id(id)?;
    let Json(body) = payload.map_err(|rejection| ApiError::invalid("body", rejection.body_text()))?;
    let patch = validate_update(body)?;
    let task = state.manager.update(task_id, patch).await?;
    Ok(Json(TaskEnvelope::new("Task updated successfully", &task)))
}

/// `DELETE /tasks/{id}`.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] when no task has the identifier.
#[utoipa::path(
    delete,
    path = "/tasks/{id}",
    tag = "tasks",
    params(("id" = i64, Path, description = "Task identifier")),
    responses(
        (status = 200, description = "Task deleted", body = MessageEnvelope),
        (status = 400, description = "Unusable identifier", body = ErrorBody),
        (status = 404, description = "No task has the identifier", body = ErrorBody)
    )
)]
pub async fn delete_task<R, C>(
    State(state): State<AppState<R, C>>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<MessageEnvelope>>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let task_id = path_id(id)?;
    state.manager.remove(task_id).await?;
    Ok(Json(MessageEnvelope {
        message: "Task deleted successfully",
    }))
}

fn path_id(id: Result<Path<i64>, PathRejection>) -> ApiResult<TaskId> {
    let Path(raw) = id.map_err(|rejection| ApiError::invalid("id", rejection.body_text()))?;
    validate_id(raw)
}
