//! Service layer for task creation, listing, lookup, update, and removal.

use crate::task::{
    domain::{
        NewTask, PageRequest, Task, TaskFilter, TaskId, TaskName, TaskPage, TaskPatch,
        TaskPriority, TaskStatus,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

/// Validated request for creating a task.
///
/// `status` and `is_active` fall back to their domain defaults when unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    name: TaskName,
    due_date: DateTime<Utc>,
    priority: TaskPriority,
    status: Option<TaskStatus>,
    is_active: Option<bool>,
}

impl CreateTaskRequest {
    /// Creates a request with the required task fields.
    #[must_use]
    pub const fn new(name: TaskName, due_date: DateTime<Utc>, priority: TaskPriority) -> Self {
        Self {
            name,
            due_date,
            priority,
            status: None,
            is_active: None,
        }
    }

    /// Sets an explicit initial status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets an explicit initial active flag.
    #[must_use]
    pub const fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskManagerError {
    /// No task matches the identifier.
    #[error("task with ID {0} not found")]
    NotFound(TaskId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}

impl From<TaskRepositoryError> for TaskManagerError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other @ TaskRepositoryError::Persistence(_) => Self::Repository(other),
        }
    }
}

/// Result type for task manager operations.
pub type TaskManagerResult<T> = Result<T, TaskManagerError>;

/// Task orchestration service; the sole mediator of task storage.
#[derive(Clone)]
pub struct TaskManager<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskManager<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task manager.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates and stores a task, applying defaults for omitted fields.
    ///
    /// # Errors
    ///
    /// Returns [`TaskManagerError::Repository`] when the repository rejects
    /// persistence.
    #[instrument(skip(self, request), fields(priority = %request.priority))]
    pub async fn create(&self, request: CreateTaskRequest) -> TaskManagerResult<Task> {
        let CreateTaskRequest {
            name,
            due_date,
            priority,
            status,
            is_active,
        } = request;

        let mut new_task = NewTask::new(name, due_date, priority, &*self.clock);
        if let Some(value) = status {
            new_task = new_task.with_status(value);
        }
        if let Some(value) = is_active {
            new_task = new_task.with_active(value);
        }

        let task = self.repository.insert(&new_task).await?;
        info!(task_id = %task.id(), "task created");
        Ok(task)
    }

    /// Lists one page of tasks matching every supplied filter criterion.
    ///
    /// # Errors
    ///
    /// Returns [`TaskManagerError::Repository`] when the query fails.
    #[instrument(skip(self), fields(page = page.page(), limit = page.limit()))]
    pub async fn list(&self, filter: TaskFilter, page: PageRequest) -> TaskManagerResult<TaskPage> {
        let result = self.repository.list(&filter, page).await?;
        debug!(
            returned = result.tasks.len(),
            total = result.total,
            "tasks listed"
        );
        Ok(result)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when the task does not exist; callers decide
    /// whether absence is an error.
    ///
    /// # Errors
    ///
    /// Returns [`TaskManagerError::Repository`] when the lookup fails.
    #[instrument(skip(self))]
    pub async fn find_one(&self, id: TaskId) -> TaskManagerResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Applies a partial update to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskManagerError::NotFound`] when the task does not exist,
    /// or [`TaskManagerError::Repository`] when persistence fails.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: TaskId, patch: TaskPatch) -> TaskManagerResult<Task> {
        let mut task = self.require(id).await?;
        task.apply(patch);
        self.repository.update(&task).await?;
        info!(task_id = %id, "task updated");
        Ok(task)
    }

    /// Permanently removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskManagerError::NotFound`] when the task does not exist,
    /// or [`TaskManagerError::Repository`] when persistence fails.
    #[instrument(skip(self))]
    pub async fn remove(&self, id: TaskId) -> TaskManagerResult<()> {
        self.require(id).await?;
        self.repository.delete(id).await?;
        info!(task_id = %id, "task removed");
        Ok(())
    }

    async fn require(&self, id: TaskId) -> TaskManagerResult<Task> {
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            warn!(task_id = %id, "task not found");
            TaskManagerError::NotFound(id)
        })
    }
}
