//! Route table for the task service.

use super::docs::openapi_json;
use super::handlers::{create_task, delete_task, get_task, health, list_tasks, update_task};
use super::state::AppState;
use crate::task::ports::TaskRepository;
use axum::Router;
use axum::routing::get;
use mockable::Clock;
use tower_http::trace::TraceLayer;

/// Builds the application router with request tracing applied.
#[must_use]
pub fn create_router<R, C>(state: AppState<R, C>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .route("/tasks", get(list_tasks::<R, C>).post(create_task::<R, C>))
        .route(
            "/tasks/{id}",
            get(get_task::<R, C>)
                .patch(update_task::<R, C>)
                .delete(delete_task::<R, C>),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
