//! Shared world state for task tracking BDD scenarios.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use mockable::DefaultClock;
use rstest::fixture;
use task_tracker::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{PageRequest, Task, TaskPage, TaskPriority, TaskStatus},
    services::{TaskManager, TaskManagerError},
};

/// Manager type used by the BDD world.
pub type TestTaskManager = TaskManager<InMemoryTaskRepository, DefaultClock>;

/// Scenario world for task tracking behaviour tests.
pub struct TaskCrudWorld {
    pub manager: TestTaskManager,
    pub last_task: Option<Task>,
    pub last_page: Option<(PageRequest, TaskPage)>,
    pub last_failure: Option<TaskManagerError>,
}

impl TaskCrudWorld {
    /// Creates a world over an empty repository.
    #[must_use]
    pub fn new() -> Self {
        let manager = TaskManager::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(DefaultClock),
        );

        Self {
            manager,
            last_task: None,
            last_page: None,
            last_failure: None,
        }
    }

    /// Returns the most recently created or updated task.
    pub fn task(&self) -> Result<&Task, eyre::Report> {
        self.last_task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }
}

impl Default for TaskCrudWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskCrudWorld {
    TaskCrudWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Due date shared by every scenario task.
pub fn scenario_due_date() -> Result<DateTime<Utc>, eyre::Report> {
    Utc.with_ymd_and_hms(2030, 1, 1, 9, 0, 0)
        .single()
        .ok_or_else(|| eyre::eyre!("invalid scenario due date"))
}

/// Parses a priority named in a scenario.
pub fn priority(raw: &str) -> Result<TaskPriority, eyre::Report> {
    TaskPriority::try_from(raw).map_err(|err| eyre::eyre!("invalid priority in scenario: {err}"))
}

/// Parses a status named in a scenario.
pub fn status(raw: &str) -> Result<TaskStatus, eyre::Report> {
    TaskStatus::try_from(raw).map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))
}
