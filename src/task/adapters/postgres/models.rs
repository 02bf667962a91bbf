//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Short title.
    pub title: String,
    /// Free-text body.
    pub body: String,
    /// Durable completion flag.
    pub completed: bool,
    /// Deadline.
    pub deadline: DateTime<Utc>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Short title.
    pub title: String,
    /// Free-text body.
    pub body: String,
    /// Durable completion flag.
    pub completed: bool,
    /// Deadline.
    pub deadline: DateTime<Utc>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Changeset covering every field a lifecycle mutation may touch.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskChangeset {
    /// Replacement title.
    pub title: String,
    /// Replacement body.
    pub body: String,
    /// Replacement completion flag.
    pub completed: bool,
    /// Replacement deadline.
    pub deadline: DateTime<Utc>,
}
