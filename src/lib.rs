//! Task tracker: a CRUD service for to-do tasks over HTTP and `PostgreSQL`.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: validated task values, filters, and page windows
//! - **Ports**: the [`TaskRepository`](task::ports::TaskRepository) trait
//! - **Adapters**: in-memory and Diesel-backed `PostgreSQL` repositories
//! - **Services**: the [`TaskManager`](task::services::TaskManager) that
//!   mediates all storage access
//!
//! # Modules
//!
//! - [`api`]: axum router, handlers, validation, and response envelopes
//! - [`config`]: environment-driven configuration
//! - [`server`]: listener with graceful shutdown
//! - [`task`]: task domain, storage, and orchestration
//! - [`telemetry`]: tracing subscriber setup

pub mod api;
pub mod config;
pub mod server;
pub mod task;
pub mod telemetry;
