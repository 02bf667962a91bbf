//! Password hashing capability port.

use crate::account::domain::PasswordHash;

/// One-way credential derivation and verification.
///
/// The concrete algorithm is an adapter choice; callers only rely on
/// `verify(raw, hash(raw))` holding and on the raw password never being
/// recoverable from the derived value.
pub trait PasswordHasher: Send + Sync {
    /// Derives a credential from a raw password.
    #[must_use]
    fn hash(&self, raw: &str) -> PasswordHash;

    /// Checks a raw password against a derived credential.
    #[must_use]
    fn verify(&self, raw: &str, hash: &PasswordHash) -> bool;
}
