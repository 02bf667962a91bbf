//! Salted SHA-256 password hasher adapter.

use crate::account::domain::PasswordHash;
use crate::account::ports::PasswordHasher;
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Separator between the salt and the digest in the encoded credential.
const SALT_SEPARATOR: char = '$';

/// Salted SHA-256 implementation of the hasher port.
///
/// Credentials are encoded as `salt$hexdigest` with a random per-account
/// salt, so equal passwords never produce equal stored values.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256PasswordHasher;

impl Sha256PasswordHasher {
    /// Creates a new hasher.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Sha256PasswordHasher {
    fn hash(&self, raw: &str) -> PasswordHash {
        let salt = Uuid::new_v4().simple().to_string();
        let digest = salted_digest(&salt, raw);
        PasswordHash::new(format!("{salt}{SALT_SEPARATOR}{digest}"))
    }

    fn verify(&self, raw: &str, hash: &PasswordHash) -> bool {
        hash.as_str()
            .split_once(SALT_SEPARATOR)
            .is_some_and(|(salt, digest)| salted_digest(salt, raw) == digest)
    }
}

fn salted_digest(salt: &str, raw: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(raw.as_bytes());
    hasher
        .finalize()
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect()
}
