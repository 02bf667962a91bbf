//! Registration, login, and logout flows through the wired context.

use super::helpers::context;
use agendum::account::domain::AccountDomainError;
use agendum::account::ports::AccountRepositoryError;
use agendum::account::services::{AuthError, RegisterAccountRequest, RegistrationError};
use agendum::app::MemoryAppContext;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn register_then_login_round_trips(context: MemoryAppContext) {
    let account = context
        .registration()
        .register(RegisterAccountRequest::new("alice", "s3cret", "s3cret"))
        .await
        .expect("registration should succeed");

    let session = context
        .auth()
        .login("alice", "s3cret")
        .await
        .expect("login should succeed");

    assert_eq!(session.account_id(), account.id());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn mismatched_passwords_never_create_an_account(context: MemoryAppContext) {
    let result = context
        .registration()
        .register(RegisterAccountRequest::new("alice", "one", "two"))
        .await;

    assert!(matches!(
        result,
        Err(RegistrationError::Domain(
            AccountDomainError::PasswordMismatch
        ))
    ));
    let login = context.auth().login("alice", "one").await;
    assert!(matches!(login, Err(AuthError::InvalidCredentials)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn second_registration_with_same_username_conflicts(context: MemoryAppContext) {
    context
        .registration()
        .register(RegisterAccountRequest::new("alice", "first", "first"))
        .await
        .expect("first registration should succeed");

    let result = context
        .registration()
        .register(RegisterAccountRequest::new("alice", "second", "second"))
        .await;

    assert!(matches!(
        result,
        Err(RegistrationError::Repository(
            AccountRepositoryError::DuplicateUsername(username)
        )) if username.as_str() == "alice"
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn wrong_password_does_not_establish_a_session(context: MemoryAppContext) {
    context
        .registration()
        .register(RegisterAccountRequest::new("alice", "s3cret", "s3cret"))
        .await
        .expect("registration should succeed");

    let result = context.auth().login("alice", "guess").await;

    assert!(matches!(result, Err(AuthError::InvalidCredentials)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn logout_is_idempotent(context: MemoryAppContext) {
    context
        .registration()
        .register(RegisterAccountRequest::new("alice", "s3cret", "s3cret"))
        .await
        .expect("registration should succeed");
    let session = context
        .auth()
        .login("alice", "s3cret")
        .await
        .expect("login should succeed");

    context
        .auth()
        .logout(session.token())
        .await
        .expect("logout should succeed");
    context
        .auth()
        .logout(session.token())
        .await
        .expect("repeated logout should succeed");
}
