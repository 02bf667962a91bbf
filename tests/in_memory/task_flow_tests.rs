//! Task lifecycle through the session-gated surface.

use super::helpers::{content, context, deadline_in, login};
use agendum::app::{AppError, MemoryAppContext};
use agendum::task::domain::{DisplayStatus, TaskDomainError, TaskId};
use agendum::task::ports::TaskRepositoryError;
use agendum::task::services::{TaskContentRequest, TaskLifecycleError};
use chrono::{Duration, Utc};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_edit_complete_delete_round_trip(context: MemoryAppContext) {
    let token = login(&context).await;

    let created = context
        .tasks()
        .create(
            token,
            TaskContentRequest::new(
                "Plan the trip",
                "Book train\nPack bags",
                deadline_in(Duration::days(2)),
            ),
        )
        .await
        .expect("create should succeed");
    assert!(!created.completed());

    let updated = context
        .tasks()
        .update_content(
            token,
            created.id(),
            TaskContentRequest::new(
                "Plan the weekend trip",
                "Book train\nPack bags\nCharge camera",
                deadline_in(Duration::days(3)),
            ),
        )
        .await
        .expect("update should succeed");
    assert_eq!(updated.title().as_str(), "Plan the weekend trip");
    assert_eq!(updated.created_at(), created.created_at());

    let completed = context
        .tasks()
        .set_completed(token, created.id(), true)
        .await
        .expect("completion should succeed");
    assert!(completed.completed());
    assert_eq!(
        completed.display_status(Utc::now()),
        DisplayStatus::Completed
    );

    context
        .tasks()
        .delete(token, created.id())
        .await
        .expect("delete should succeed");
    let gone = context.tasks().get(token, created.id()).await;
    assert!(matches!(
        gone,
        Err(AppError::Task(TaskLifecycleError::Repository(
            TaskRepositoryError::NotFound(_)
        )))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn validation_failures_surface_before_any_write(context: MemoryAppContext) {
    let token = login(&context).await;

    let blank_title = context
        .tasks()
        .create(token, TaskContentRequest::new("", "details", deadline_in(Duration::days(1))))
        .await;
    let bad_deadline = context
        .tasks()
        .create(token, TaskContentRequest::new("Title", "details", "soonish"))
        .await;

    assert!(matches!(
        blank_title,
        Err(AppError::Task(TaskLifecycleError::Domain(
            TaskDomainError::EmptyTitle
        )))
    ));
    assert!(matches!(
        bad_deadline,
        Err(AppError::Task(TaskLifecycleError::Domain(
            TaskDomainError::InvalidDeadline(_)
        )))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_missing_task_reports_not_found(context: MemoryAppContext) {
    let token = login(&context).await;

    let result = context.tasks().delete(token, TaskId::new()).await;

    assert!(matches!(
        result,
        Err(AppError::Task(TaskLifecycleError::Repository(
            TaskRepositoryError::NotFound(_)
        )))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn two_hour_deadline_derives_due_soon_until_completed(context: MemoryAppContext) {
    let token = login(&context).await;

    let created = context
        .tasks()
        .create(token, content("Due soon", Duration::hours(2)))
        .await
        .expect("create should succeed");
    assert_eq!(created.display_status(Utc::now()), DisplayStatus::DueSoon);

    let completed = context
        .tasks()
        .set_completed(token, created.id(), true)
        .await
        .expect("completion should succeed");
    assert_eq!(
        completed.display_status(Utc::now()),
        DisplayStatus::Completed
    );

    let overdue = context
        .tasks()
        .create(token, content("Already late", -Duration::hours(1)))
        .await
        .expect("create should succeed");
    assert_eq!(overdue.display_status(Utc::now()), DisplayStatus::Overdue);
}
