//! Service layer for login, logout, and session authentication.

use crate::account::{
    domain::{AccountId, Session, SessionToken, Username},
    ports::{
        AccountRepository, AccountRepositoryError, PasswordHasher, SessionStore, SessionStoreError,
    },
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The username or password is wrong.
    ///
    /// Unknown usernames and failed verifications share this variant so
    /// responses never reveal which one happened.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// No session holds the presented token.
    #[error("authentication required")]
    NotAuthenticated,

    /// Account lookup failed.
    #[error(transparent)]
    Accounts(#[from] AccountRepositoryError),

    /// Session store operation failed.
    #[error(transparent)]
    Sessions(#[from] SessionStoreError),
}

/// Result type for authentication service operations.
pub type AuthResult<T> = Result<T, AuthError>;

/// Login, logout, and session verification service.
pub struct AuthService<R, S, H, C>
where
    R: AccountRepository,
    S: SessionStore,
    H: PasswordHasher,
    C: Clock + Send + Sync,
{
    accounts: Arc<R>,
    sessions: Arc<S>,
    hasher: Arc<H>,
    clock: Arc<C>,
}

impl<R, S, H, C> Clone for AuthService<R, S, H, C>
where
    R: AccountRepository,
    S: SessionStore,
    H: PasswordHasher,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            accounts: Arc::clone(&self.accounts),
            sessions: Arc::clone(&self.sessions),
            hasher: Arc::clone(&self.hasher),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, S, H, C> AuthService<R, S, H, C>
where
    R: AccountRepository,
    S: SessionStore,
    H: PasswordHasher,
    C: Clock + Send + Sync,
{
    /// Creates a new authentication service.
    #[must_use]
    pub const fn new(accounts: Arc<R>, sessions: Arc<S>, hasher: Arc<H>, clock: Arc<C>) -> Self {
        Self {
            accounts,
            sessions,
            hasher,
            clock,
        }
    }

    /// Verifies credentials and establishes a session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] when the username is
    /// unknown or the password does not verify; the two cases are
    /// indistinguishable to the caller. Storage failures surface as their
    /// own variants.
    pub async fn login(&self, username: &str, password: &str) -> AuthResult<Session> {
        let Ok(parsed) = Username::new(username) else {
            return Err(AuthError::InvalidCredentials);
        };
        let Some(account) = self.accounts.find_by_username(&parsed).await? else {
            return Err(AuthError::InvalidCredentials);
        };
        if !self.hasher.verify(password, account.password_hash()) {
            return Err(AuthError::InvalidCredentials);
        }

        let session = Session::establish(account.id(), &*self.clock);
        self.sessions.insert(&session).await?;
        tracing::info!(account_id = %account.id(), "session established");
        Ok(session)
    }

    /// Terminates the session holding the token.
    ///
    /// Idempotent: a second logout with the same token is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Sessions`] when the session store fails.
    pub async fn logout(&self, token: SessionToken) -> AuthResult<()> {
        self.sessions.remove(token).await?;
        tracing::debug!("session terminated");
        Ok(())
    }

    /// Resolves a token to the bound account.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotAuthenticated`] when no session holds the
    /// token, or [`AuthError::Sessions`] when the session store fails.
    pub async fn authenticate(&self, token: SessionToken) -> AuthResult<AccountId> {
        self.sessions
            .find(token)
            .await?
            .map(|session| session.account_id())
            .ok_or(AuthError::NotAuthenticated)
    }
}
