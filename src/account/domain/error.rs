//! Error types for account domain validation.

use thiserror::Error;

/// Errors returned while constructing domain account values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountDomainError {
    /// The username is empty after trimming.
    #[error("username must not be empty")]
    EmptyUsername,

    /// The username contains whitespace.
    #[error("username '{0}' must not contain whitespace")]
    InvalidUsername(String),

    /// The username exceeds the persisted column width.
    #[error("username '{0}' exceeds 100 characters")]
    UsernameTooLong(String),

    /// The password or its confirmation is blank.
    #[error("password must not be empty")]
    EmptyPassword,

    /// The password confirmation does not match.
    #[error("passwords do not match")]
    PasswordMismatch,
}
