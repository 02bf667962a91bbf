//! View models handed to templates.

use crate::task::domain::Task;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Timestamp presentation used across pages.
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Form-control format for prefilled deadline inputs.
const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Template-facing task representation.
///
/// Status is derived at construction time from the instant the caller
/// passes in; building views is the read path, so every render sees the
/// current derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskView {
    /// Task identifier in canonical string form.
    pub id: String,
    /// Title text.
    pub title: String,
    /// Raw body text; templates apply the `linebreaks` filter.
    pub body: String,
    /// Derived display status label.
    pub status: &'static str,
    /// Durable completion flag.
    pub completed: bool,
    /// Deadline formatted for display.
    pub deadline: String,
    /// Deadline formatted for a `datetime-local` input.
    pub deadline_input: String,
    /// Creation timestamp formatted for display.
    pub created_at: String,
}

impl TaskView {
    /// Builds a view of the task as of `now`.
    #[must_use]
    pub fn from_task(task: &Task, now: DateTime<Utc>) -> Self {
        Self {
            id: task.id().to_string(),
            title: task.title().as_str().to_owned(),
            body: task.body().as_str().to_owned(),
            status: task.display_status(now).as_str(),
            completed: task.completed(),
            deadline: task.deadline().format(DISPLAY_FORMAT).to_string(),
            deadline_input: task.deadline().format(INPUT_FORMAT).to_string(),
            created_at: task.created_at().format(DISPLAY_FORMAT).to_string(),
        }
    }

    /// Builds views for a slice of tasks as of `now`.
    #[must_use]
    pub fn from_tasks(tasks: &[Task], now: DateTime<Utc>) -> Vec<Self> {
        tasks.iter().map(|task| Self::from_task(task, now)).collect()
    }
}
