//! Adapter implementations of the account ports.

pub mod hasher;
pub mod memory;
pub mod postgres;

pub use hasher::Sha256PasswordHasher;
