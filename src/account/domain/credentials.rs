//! Opaque derived credential type.

use serde::{Deserialize, Serialize};

/// One-way derived password credential.
///
/// Produced and checked exclusively through the hasher port; the raw
/// password never lives past registration or login verification. The type
/// deliberately has no `Display` implementation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wraps an already-derived credential.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the encoded credential.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PasswordHash {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
