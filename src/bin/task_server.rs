//! Serves the task tracker HTTP API backed by `PostgreSQL`.
//!
//! Usage:
//!
//! ```text
//! task_server
//! ```
//!
//! Configuration is read from the environment (and a `.env` file when
//! present): `DATABASE_HOST`, `DATABASE_USER`, `DATABASE_PASSWORD`, and
//! `DATABASE_NAME` are required; `DATABASE_PORT`,
//! `DATABASE_MAX_CONNECTIONS`, `HOST`, and `PORT` are optional. The
//! `tasks` table must already exist; see `migrations/`.

use mockable::DefaultClock;
use std::sync::Arc;
use task_tracker::api::{AppState, create_router};
use task_tracker::config::AppConfig;
use task_tracker::server;
use task_tracker::task::adapters::postgres::{PostgresTaskRepository, build_pool};
use task_tracker::task::services::TaskManager;
use task_tracker::telemetry::init_tracing;
use tracing::info;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    init_tracing()?;

    let config = AppConfig::from_env()?;
    info!(database = ?config.database, "configuration loaded");

    let pool = build_pool(&config.database.url(), config.database.max_connections)?;
    let repository = Arc::new(PostgresTaskRepository::new(pool));
    let manager = TaskManager::new(repository, Arc::new(DefaultClock));
    let router = create_router(AppState::new(manager));

    server::run(&config.server, router).await?;
    Ok(())
}
