//! Authenticated session bound to an account.

use super::{AccountId, SessionToken};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// An established authenticated session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    token: SessionToken,
    account_id: AccountId,
    established_at: DateTime<Utc>,
}

impl Session {
    /// Establishes a new session for the given account.
    #[must_use]
    pub fn establish(account_id: AccountId, clock: &impl Clock) -> Self {
        Self {
            token: SessionToken::new(),
            account_id,
            established_at: clock.utc(),
        }
    }

    /// Returns the bearer token.
    #[must_use]
    pub const fn token(&self) -> SessionToken {
        self.token
    }

    /// Returns the bound account identifier.
    #[must_use]
    pub const fn account_id(&self) -> AccountId {
        self.account_id
    }

    /// Returns the establishment timestamp.
    #[must_use]
    pub const fn established_at(&self) -> DateTime<Utc> {
        self.established_at
    }
}
