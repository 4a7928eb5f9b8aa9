//! HTTP surface: routing, request validation, and response envelopes.
//!
//! Handlers translate wire payloads into domain values through
//! [`validation`], delegate to
//! [`TaskManager`](crate::task::services::TaskManager), and render outcomes
//! as `{message, data}` envelopes or `{statusCode, error, message}` errors.
//! [`ApiDoc`] describes the routes and is served at
//! `/api-docs/openapi.json`.

pub mod docs;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod validation;

pub use docs::ApiDoc;
pub use error::{ApiError, FieldViolation};
pub use routes::create_router;
pub use state::AppState;

#[cfg(test)]
mod tests;
