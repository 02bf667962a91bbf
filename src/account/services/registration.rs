//! Service layer for account registration.

use crate::account::{
    domain::{Account, AccountDomainError, Username},
    ports::{AccountRepository, AccountRepositoryError, PasswordHasher},
};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for registering a new account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterAccountRequest {
    username: String,
    password: String,
    password_confirm: String,
}

impl RegisterAccountRequest {
    /// Creates a request from raw form fields.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        password_confirm: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            password_confirm: password_confirm.into(),
        }
    }
}

/// Service-level errors for registration.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] AccountDomainError),
    /// Repository operation failed (including username conflicts).
    #[error(transparent)]
    Repository(#[from] AccountRepositoryError),
}

/// Result type for registration service operations.
pub type RegistrationResult<T> = Result<T, RegistrationError>;

/// Account registration orchestration service.
pub struct RegistrationService<R, H>
where
    R: AccountRepository,
    H: PasswordHasher,
{
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R, H> Clone for RegistrationService<R, H>
where
    R: AccountRepository,
    H: PasswordHasher,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            hasher: Arc::clone(&self.hasher),
        }
    }
}

impl<R, H> RegistrationService<R, H>
where
    R: AccountRepository,
    H: PasswordHasher,
{
    /// Creates a new registration service.
    #[must_use]
    pub const fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    /// Registers a new account.
    ///
    /// Validation runs before the password is hashed; the raw password is
    /// dropped with the request once the credential is derived.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::Domain`] when a field is blank or the
    /// confirmation does not match, and [`RegistrationError::Repository`]
    /// when the username is already taken or persistence fails. Nothing is
    /// stored on any failure path.
    pub async fn register(&self, request: RegisterAccountRequest) -> RegistrationResult<Account> {
        let RegisterAccountRequest {
            username: raw_username,
            password,
            password_confirm,
        } = request;

        let username = Username::new(raw_username)?;
        if password.is_empty() || password_confirm.is_empty() {
            return Err(AccountDomainError::EmptyPassword.into());
        }
        if password != password_confirm {
            return Err(AccountDomainError::PasswordMismatch.into());
        }

        let account = Account::new(username, self.hasher.hash(&password));
        self.repository.store(&account).await?;
        tracing::info!(account_id = %account.id(), "account registered");
        Ok(account)
    }
}
