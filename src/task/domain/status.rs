//! Derived display status for tasks.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Display status derived from the completion flag, the deadline, and the
/// current time.
///
/// Only the completion flag is persisted; the other three values are
/// recomputed on every read so that the passage of time alone moves a task
/// between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayStatus {
    /// Open with at least a full day before the deadline.
    Open,
    /// Marked done; wins over every time-based condition.
    Completed,
    /// Open and at or past the deadline.
    Overdue,
    /// Open with less than a day before the deadline.
    DueSoon,
}

impl DisplayStatus {
    /// Derives the display status for a task.
    ///
    /// Precedence: completion first, then the overdue check, then due-soon.
    /// A deadline exactly equal to `now` derives [`DisplayStatus::Overdue`].
    #[must_use]
    pub fn derive(completed: bool, deadline: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if completed {
            return Self::Completed;
        }
        if deadline <= now {
            return Self::Overdue;
        }
        if deadline - now < Duration::days(1) {
            return Self::DueSoon;
        }
        Self::Open
    }

    /// Returns the canonical presentation label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Completed => "completed",
            Self::Overdue => "overdue",
            Self::DueSoon => "due_soon",
        }
    }
}
