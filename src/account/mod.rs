//! Accounts, credentials, and session-bound authentication.
//!
//! Registration hashes the raw password through an injected capability and
//! discards it; login collapses unknown-username and wrong-password into a
//! single failure so usernames cannot be enumerated. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
