//! Agendum: a personal task tracker core.
//!
//! This crate provides the core of a small task-tracking web application:
//! task lifecycle with a derived display status, account registration and
//! login, session-gated access to every task operation, and the view
//! models and templates the server-rendered pages need.
//!
//! # Architecture
//!
//! Agendum follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, hashing,
//!   session storage)
//!
//! # Modules
//!
//! - [`task`]: Task lifecycle and display-status derivation
//! - [`account`]: Accounts, credentials, and sessions
//! - [`app`]: Configuration, wiring, and the session-gated surface
//! - [`view`]: Page rendering and view models

pub mod account;
pub mod app;
pub mod task;
pub mod view;
