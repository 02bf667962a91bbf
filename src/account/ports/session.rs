//! Session store port.

use crate::account::domain::{Session, SessionToken};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for session store operations.
pub type SessionStoreResult<T> = Result<T, SessionStoreError>;

/// Process-local session persistence contract.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Stores an established session.
    async fn insert(&self, session: &Session) -> SessionStoreResult<()>;

    /// Finds a session by token.
    ///
    /// Returns `None` when no session holds the token.
    async fn find(&self, token: SessionToken) -> SessionStoreResult<Option<Session>>;

    /// Removes a session.
    ///
    /// Removing an absent token is a no-op, which makes logout idempotent.
    async fn remove(&self, token: SessionToken) -> SessionStoreResult<()>;
}

/// Errors returned by session store implementations.
#[derive(Debug, Clone, Error)]
pub enum SessionStoreError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl SessionStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
