//! Shared state handed to every handler.

use crate::task::ports::TaskRepository;
use crate::task::services::TaskManager;
use mockable::Clock;
use std::sync::Arc;

/// Router state wrapping the task manager.
pub struct AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Task orchestration service.
    pub manager: Arc<TaskManager<R, C>>,
}

impl<R, C> AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Wraps `manager` for sharing across requests.
    #[must_use]
    pub fn new(manager: TaskManager<R, C>) -> Self {
        Self {
            manager: Arc::new(manager),
        }
    }
}

impl<R, C> Clone for AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            manager: Arc::clone(&self.manager),
        }
    }
}
