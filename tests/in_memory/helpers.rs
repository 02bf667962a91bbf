//! Shared test helpers for in-memory integration tests.

use agendum::account::domain::SessionToken;
use agendum::account::services::RegisterAccountRequest;
use agendum::app::{AppConfig, MemoryAppContext};
use agendum::task::domain::{Task, TaskId};
use agendum::task::services::TaskContentRequest;
use chrono::{Duration, Utc};
use rstest::fixture;

/// Provides a freshly wired in-memory application context.
#[fixture]
pub fn context() -> MemoryAppContext {
    MemoryAppContext::in_memory(AppConfig::default())
}

/// Registers the default account and logs it in, returning the token.
pub async fn login(context: &MemoryAppContext) -> SessionToken {
    context
        .registration()
        .register(RegisterAccountRequest::new("alice", "s3cret", "s3cret"))
        .await
        .expect("registration should succeed");
    context
        .auth()
        .login("alice", "s3cret")
        .await
        .expect("login should succeed")
        .token()
}

/// Formats an offset from the current time as `datetime-local` form input.
#[must_use]
pub fn deadline_in(delta: Duration) -> String {
    (Utc::now() + delta).format("%Y-%m-%dT%H:%M").to_string()
}

/// Builds a content request with the given title and deadline offset.
#[must_use]
pub fn content(title: &str, delta: Duration) -> TaskContentRequest {
    TaskContentRequest::new(title, "details", deadline_in(delta))
}

/// Asserts the listing contains exactly one task with the expected ID.
///
/// # Errors
///
/// Returns an error if the result set does not contain exactly one task
/// matching `expected_id`.
pub fn assert_single_task(found: &[Task], expected_id: TaskId) -> Result<(), eyre::Report> {
    eyre::ensure!(
        found.len() == 1,
        "expected exactly one task, found {}",
        found.len()
    );
    let task = found
        .first()
        .ok_or_else(|| eyre::eyre!("expected at least one task"))?;
    eyre::ensure!(task.id() == expected_id, "task ID mismatch");
    Ok(())
}
