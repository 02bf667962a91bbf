//! Domain model for accounts and sessions.

mod account;
mod credentials;
mod error;
mod ids;
mod session;
mod username;

pub use account::{Account, PersistedAccountData};
pub use credentials::PasswordHash;
pub use error::AccountDomainError;
pub use ids::{AccountId, SessionToken};
pub use session::Session;
pub use username::Username;
