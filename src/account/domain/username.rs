//! Validated username type.

use super::AccountDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a username, matching the `VARCHAR(100)` column.
const MAX_USERNAME_LENGTH: usize = 100;

/// Validated, trimmed account username.
///
/// Usernames are matched exactly as entered after trimming; no case
/// folding is applied, so `Alice` and `alice` are distinct accounts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Creates a validated username.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::EmptyUsername`] when the value is
    /// empty after trimming, [`AccountDomainError::InvalidUsername`] when
    /// it contains interior whitespace, or
    /// [`AccountDomainError::UsernameTooLong`] when it exceeds 100
    /// characters.
    pub fn new(value: impl Into<String>) -> Result<Self, AccountDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(AccountDomainError::EmptyUsername);
        }

        if trimmed.chars().any(char::is_whitespace) {
            return Err(AccountDomainError::InvalidUsername(raw));
        }

        if trimmed.chars().count() > MAX_USERNAME_LENGTH {
            return Err(AccountDomainError::UsernameTooLong(raw));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the username as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
