//! Error types for task domain validation.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the persisted column width.
    #[error("task title '{0}' exceeds 100 characters")]
    TitleTooLong(String),

    /// The task body contains no visible text.
    #[error("task body must not be empty")]
    EmptyBody,

    /// The deadline string does not parse as `YYYY-MM-DDTHH:MM`.
    #[error("invalid deadline '{0}', expected YYYY-MM-DDTHH:MM")]
    InvalidDeadline(String),
}
