//! Validated task content types and deadline parsing.

use super::TaskDomainError;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a task title, matching the `VARCHAR(100)` column.
const MAX_TITLE_LENGTH: usize = 100;

/// Input format produced by `datetime-local` form controls.
const DEADLINE_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Validated, trimmed task title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated task title.
    ///
    /// The input is trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the value is empty after
    /// trimming, or [`TaskDomainError::TitleTooLong`] when it exceeds 100
    /// characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }

        if trimmed.chars().count() > MAX_TITLE_LENGTH {
            return Err(TaskDomainError::TitleTooLong(raw));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the title as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated task body text.
///
/// Embedded line breaks are preserved verbatim; converting them to markup
/// is the view layer's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskBody(String);

impl TaskBody {
    /// Creates a validated task body.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyBody`] when the value contains no
    /// visible text.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();

        if raw.trim().is_empty() {
            return Err(TaskDomainError::EmptyBody);
        }

        Ok(Self(raw))
    }

    /// Returns the body as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskBody {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Parses a deadline from the `datetime-local` form representation.
///
/// Accepted input looks like `2026-03-14T09:30`; the value is interpreted
/// as UTC.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidDeadline`] when the value does not
/// match the expected format.
pub fn parse_deadline(value: &str) -> Result<DateTime<Utc>, TaskDomainError> {
    NaiveDateTime::parse_from_str(value.trim(), DEADLINE_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| TaskDomainError::InvalidDeadline(value.to_owned()))
}

/// The mutable content of a task: title, body, and deadline.
///
/// Bundles the three fields that creation sets and update replaces, keeping
/// `completed` and `created_at` out of reach of content edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskContent {
    title: TaskTitle,
    body: TaskBody,
    deadline: DateTime<Utc>,
}

impl TaskContent {
    /// Creates task content from already-validated parts.
    #[must_use]
    pub const fn new(title: TaskTitle, body: TaskBody, deadline: DateTime<Utc>) -> Self {
        Self {
            title,
            body,
            deadline,
        }
    }

    /// Validates raw form input into task content.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when the title or body fails validation
    /// or the deadline string does not parse.
    pub fn parse(title: &str, body: &str, deadline: &str) -> Result<Self, TaskDomainError> {
        Ok(Self {
            title: TaskTitle::new(title)?,
            body: TaskBody::new(body)?,
            deadline: parse_deadline(deadline)?,
        })
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the body.
    #[must_use]
    pub const fn body(&self) -> &TaskBody {
        &self.body
    }

    /// Returns the deadline.
    #[must_use]
    pub const fn deadline(&self) -> DateTime<Utc> {
        self.deadline
    }

    /// Decomposes the content into its parts.
    #[must_use]
    pub fn into_parts(self) -> (TaskTitle, TaskBody, DateTime<Utc>) {
        (self.title, self.body, self.deadline)
    }
}
