//! Application-boundary error type.

use crate::account::services::{AuthError, RegistrationError};
use crate::task::services::TaskLifecycleError;
use thiserror::Error;

/// Errors crossing the application boundary.
///
/// The surface maps these onto pages: validation errors re-render the
/// originating form, `AuthRequired` redirects to the login page, and
/// storage failures show a generic notice while the wrapped source stays
/// in the logs.
#[derive(Debug, Error)]
pub enum AppError {
    /// The request carried no valid session.
    #[error("authentication required")]
    AuthRequired,

    /// Task operation failed.
    #[error(transparent)]
    Task(#[from] TaskLifecycleError),

    /// Registration failed.
    #[error(transparent)]
    Registration(#[from] RegistrationError),

    /// Login, logout, or session verification failed.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// Result type for application-boundary operations.
pub type AppResult<T> = Result<T, AppError>;
