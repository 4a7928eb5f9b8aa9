//! Task aggregate root and its unsaved counterpart.

use super::{TaskId, TaskName, TaskPatch, TaskPriority, TaskStatus};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// A task that has not been stored yet and therefore has no identifier.
///
/// Defaults are applied at construction: status [`TaskStatus::Pending`] and
/// active flag `true`. The creation timestamp is taken from the clock once
/// and carried unchanged into storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    name: TaskName,
    due_date: DateTime<Utc>,
    status: TaskStatus,
    priority: TaskPriority,
    is_active: bool,
    date_of_creation: DateTime<Utc>,
}

impl NewTask {
    /// Creates an unsaved task with default status and active flag.
    #[must_use]
    pub fn new(
        name: TaskName,
        due_date: DateTime<Utc>,
        priority: TaskPriority,
        clock: &impl Clock,
    ) -> Self {
        Self {
            name,
            due_date,
            status: TaskStatus::default(),
            priority,
            is_active: true,
            date_of_creation: clock.utc(),
        }
    }

    /// Overrides the default status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Overrides the default active flag.
    #[must_use]
    pub const fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> DateTime<Utc> {
        self.due_date
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns whether the task is active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn date_of_creation(&self) -> DateTime<Utc> {
        self.date_of_creation
    }

    /// Attaches a storage-assigned identifier, producing a stored task.
    #[must_use]
    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            name: self.name,
            due_date: self.due_date,
            status: self.status,
            priority: self.priority,
            is_active: self.is_active,
            date_of_creation: self.date_of_creation,
        }
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    name: TaskName,
    due_date: DateTime<Utc>,
    status: TaskStatus,
    priority: TaskPriority,
    is_active: bool,
    date_of_creation: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted name.
    pub name: TaskName,
    /// Persisted due date.
    pub due_date: DateTime<Utc>,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted priority.
    pub priority: TaskPriority,
    /// Persisted active flag.
    pub is_active: bool,
    /// Persisted creation timestamp.
    pub date_of_creation: DateTime<Utc>,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            due_date: data.due_date,
            status: data.status,
            priority: data.priority,
            is_active: data.is_active,
            date_of_creation: data.date_of_creation,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> DateTime<Utc> {
        self.due_date
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns whether the task is active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn date_of_creation(&self) -> DateTime<Utc> {
        self.date_of_creation
    }

    /// Merges a partial update into this task.
    ///
    /// Only fields present in the patch are overwritten. The identifier and
    /// creation timestamp never change.
    pub fn apply(&mut self, patch: TaskPatch) {
        let TaskPatch {
            name,
            due_date,
            status,
            priority,
            is_active,
        } = patch;

        if let Some(value) = name {
            self.name = value;
        }
        if let Some(value) = due_date {
            self.due_date = value;
        }
        if let Some(value) = status {
            self.status = value;
        }
        if let Some(value) = priority {
            self.priority = value;
        }
        if let Some(value) = is_active {
            self.is_active = value;
        }
    }
}
