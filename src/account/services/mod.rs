//! Application services for registration and authentication.

mod auth;
mod registration;

pub use auth::{AuthError, AuthResult, AuthService};
pub use registration::{
    RegisterAccountRequest, RegistrationError, RegistrationResult, RegistrationService,
};
