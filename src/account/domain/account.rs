//! Account aggregate root.

use super::{AccountId, PasswordHash, Username};
use serde::{Deserialize, Serialize};

/// Account aggregate root.
///
/// Accounts are created at registration and read during login; within this
/// scope they are never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,
    username: Username,
    password_hash: PasswordHash,
}

/// Parameter object for reconstructing a persisted account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedAccountData {
    /// Persisted account identifier.
    pub id: AccountId,
    /// Persisted username.
    pub username: Username,
    /// Persisted derived credential.
    pub password_hash: PasswordHash,
}

impl Account {
    /// Creates a new account from a validated username and derived
    /// credential.
    #[must_use]
    pub fn new(username: Username, password_hash: PasswordHash) -> Self {
        Self {
            id: AccountId::new(),
            username,
            password_hash,
        }
    }

    /// Reconstructs an account from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedAccountData) -> Self {
        Self {
            id: data.id,
            username: data.username,
            password_hash: data.password_hash,
        }
    }

    /// Returns the account identifier.
    #[must_use]
    pub const fn id(&self) -> AccountId {
        self.id
    }

    /// Returns the username.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Returns the derived credential.
    #[must_use]
    pub const fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }
}
