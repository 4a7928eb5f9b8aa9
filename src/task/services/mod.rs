//! Application services for task orchestration.

mod manager;

pub use manager::{CreateTaskRequest, TaskManager, TaskManagerError, TaskManagerResult};
