//! Task lifecycle and display-status derivation.
//!
//! Tasks carry a single durable status bit (`completed`); the overdue and
//! due-soon presentations are derived from the deadline and the current
//! time on every read. The module follows hexagonal architecture:
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
