//! Port contracts for the account context.

pub mod hasher;
pub mod repository;
pub mod session;

pub use hasher::PasswordHasher;
pub use repository::{AccountRepository, AccountRepositoryError, AccountRepositoryResult};
pub use session::{SessionStore, SessionStoreError, SessionStoreResult};
