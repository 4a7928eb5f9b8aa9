//! `OpenAPI` description of the HTTP surface.

use super::dto::{
    CreateTaskPayload, HealthView, MessageEnvelope, PageEnvelope, TaskEnvelope, TaskView,
    UpdateTaskPayload,
};
use super::error::{ErrorBody, FieldViolation};
use super::handlers;
use axum::Json;
use utoipa::OpenApi;

/// Generated `OpenAPI` 3.1 document for every route.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "Task Tracker API",
        description = "Create, list, fetch, update, and delete to-do tasks."
    ),
    paths(
        handlers::health,
        handlers::create_task,
        handlers::list_tasks,
        handlers::get_task,
        handlers::update_task,
        handlers::delete_task
    ),
    components(schemas(
        CreateTaskPayload,
        UpdateTaskPayload,
        TaskView,
        TaskEnvelope,
        MessageEnvelope,
        PageEnvelope,
        HealthView,
        FieldViolation,
        ErrorBody
    )),
    tags(
        (name = "tasks", description = "Task management"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

/// `GET /api-docs/openapi.json`.
#[expect(clippy::unused_async, reason = "axum handlers must be async")]
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
