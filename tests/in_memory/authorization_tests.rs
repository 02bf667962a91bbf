//! Session gating of every task operation.

use super::helpers::{content, context, login};
use agendum::account::domain::SessionToken;
use agendum::account::services::RegisterAccountRequest;
use agendum::app::{AppError, MemoryAppContext};
use agendum::task::domain::TaskId;
use agendum::task::ports::{TaskFilter, TaskOrder};
use chrono::Duration;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn forged_token_is_rejected_before_task_logic(context: MemoryAppContext) {
    let forged = SessionToken::new();

    let create = context
        .tasks()
        .create(forged, content("Never stored", Duration::days(1)))
        .await;
    let list = context
        .tasks()
        .list(forged, TaskFilter::All, TaskOrder::CreatedAtAsc)
        .await;
    let delete = context.tasks().delete(forged, TaskId::new()).await;

    assert!(matches!(create, Err(AppError::AuthRequired)));
    assert!(matches!(list, Err(AppError::AuthRequired)));
    assert!(matches!(delete, Err(AppError::AuthRequired)));

    let token = login(&context).await;
    let all = context
        .tasks()
        .list(token, TaskFilter::All, TaskOrder::CreatedAtAsc)
        .await
        .expect("authenticated listing should succeed");
    assert!(all.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn logout_revokes_task_access(context: MemoryAppContext) {
    let token = login(&context).await;
    context
        .tasks()
        .create(token, content("Before logout", Duration::days(1)))
        .await
        .expect("authenticated create should succeed");

    context
        .auth()
        .logout(token)
        .await
        .expect("logout should succeed");

    let result = context
        .tasks()
        .list(token, TaskFilter::All, TaskOrder::CreatedAtAsc)
        .await;
    assert!(matches!(result, Err(AppError::AuthRequired)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn any_authenticated_account_sees_all_tasks(context: MemoryAppContext) {
    let first_token = login(&context).await;
    let created = context
        .tasks()
        .create(first_token, content("Shared task", Duration::days(1)))
        .await
        .expect("create should succeed");

    context
        .registration()
        .register(RegisterAccountRequest::new("bob", "pw", "pw"))
        .await
        .expect("second registration should succeed");
    let second_token = context
        .auth()
        .login("bob", "pw")
        .await
        .expect("second login should succeed")
        .token();

    let seen = context
        .tasks()
        .get(second_token, created.id())
        .await
        .expect("other account should see the task");
    assert_eq!(seen.id(), created.id());
}
