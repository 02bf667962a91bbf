//! Task aggregate root.

use super::{DisplayStatus, TaskBody, TaskContent, TaskId, TaskTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
///
/// The completion flag is the only durable status bit; everything a page
/// shows as "overdue" or "due soon" is derived through
/// [`Task::display_status`] at read time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    body: TaskBody,
    completed: bool,
    deadline: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted body text.
    pub body: TaskBody,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted deadline.
    pub deadline: DateTime<Utc>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new open task from validated content.
    #[must_use]
    pub fn new(content: TaskContent, clock: &impl Clock) -> Self {
        let (title, body, deadline) = content.into_parts();
        Self {
            id: TaskId::new(),
            title,
            body,
            completed: false,
            deadline,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            body: data.body,
            completed: data.completed,
            deadline: data.deadline,
            created_at: data.created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the body text.
    #[must_use]
    pub const fn body(&self) -> &TaskBody {
        &self.body
    }

    /// Returns the durable completion flag.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Returns the deadline.
    #[must_use]
    pub const fn deadline(&self) -> DateTime<Utc> {
        self.deadline
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replaces the title, body, and deadline.
    ///
    /// The completion flag and creation timestamp are untouchable through
    /// content edits.
    pub fn replace_content(&mut self, content: TaskContent) {
        let (title, body, deadline) = content.into_parts();
        self.title = title;
        self.body = body;
        self.deadline = deadline;
    }

    /// Sets the durable completion flag.
    pub const fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }

    /// Derives the display status against the given instant.
    #[must_use]
    pub fn display_status(&self, now: DateTime<Utc>) -> DisplayStatus {
        DisplayStatus::derive(self.completed, self.deadline, now)
    }
}
