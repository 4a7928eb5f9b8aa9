//! Domain model for task tracking.
//!
//! The task domain models creation with defaults, partial updates, and
//! filtered, paginated listing while keeping all infrastructure concerns
//! outside of the domain boundary.

mod classification;
mod due_date;
mod error;
mod ids;
mod patch;
mod query;
mod task;

pub use classification::{TaskPriority, TaskStatus};
pub use due_date::parse_due_date;
pub use error::{ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError};
pub use ids::{TaskId, TaskName};
pub use patch::TaskPatch;
pub use query::{PageRequest, TaskFilter, TaskPage};
pub use task::{NewTask, PersistedTaskData, Task};
