//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Storage-assigned task identifier.
    pub id: i32,
    /// Task name.
    pub name: String,
    /// Due date.
    pub due_date: DateTime<Utc>,
    /// Workflow status.
    pub status: String,
    /// Priority.
    pub priority: String,
    /// Active flag.
    pub is_active: bool,
    /// Creation timestamp.
    pub date_of_creation: DateTime<Utc>,
}

/// Insert model for task records; the identifier comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task name.
    pub name: String,
    /// Due date.
    pub due_date: DateTime<Utc>,
    /// Workflow status.
    pub status: String,
    /// Priority.
    pub priority: String,
    /// Active flag.
    pub is_active: bool,
    /// Creation timestamp.
    pub date_of_creation: DateTime<Utc>,
}

/// Changeset covering every mutable task column.
///
/// `date_of_creation` is excluded: it is written once, at insert.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskChangeset {
    /// Task name.
    pub name: String,
    /// Due date.
    pub due_date: DateTime<Utc>,
    /// Workflow status.
    pub status: String,
    /// Priority.
    pub priority: String,
    /// Active flag.
    pub is_active: bool,
}
