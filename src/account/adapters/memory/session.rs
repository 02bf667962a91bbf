//! In-memory session store.
//!
//! Sessions are process-local by design; the surface keeps only the token
//! in the cookie, so restarting the process logs everyone out.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::account::{
    domain::{Session, SessionToken},
    ports::{SessionStore, SessionStoreError, SessionStoreResult},
};

/// Thread-safe in-memory session store.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    state: Arc<RwLock<HashMap<SessionToken, Session>>>,
}

impl InMemorySessionStore {
    /// Creates an empty session store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn insert(&self, session: &Session) -> SessionStoreResult<()> {
        let mut state = self.state.write().map_err(|err| {
            SessionStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state.insert(session.token(), *session);
        Ok(())
    }

    async fn find(&self, token: SessionToken) -> SessionStoreResult<Option<Session>> {
        let state = self.state.read().map_err(|err| {
            SessionStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.get(&token).copied())
    }

    async fn remove(&self, token: SessionToken) -> SessionStoreResult<()> {
        let mut state = self.state.write().map_err(|err| {
            SessionStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state.remove(&token);
        Ok(())
    }
}
