//! Domain-focused tests for task content validation and the aggregate.

use crate::task::domain::{
    DisplayStatus, Task, TaskBody, TaskContent, TaskDomainError, TaskTitle, parse_deadline,
};
use chrono::Duration;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

#[rstest]
fn title_is_trimmed(clock: DefaultClock) {
    let content = TaskContent::parse("  Water the plants  ", "Back garden", "2026-09-01T09:00")
        .expect("valid content");
    let task = Task::new(content, &clock);
    assert_eq!(task.title().as_str(), "Water the plants");
}

#[rstest]
#[case("")]
#[case("   ")]
fn blank_title_is_rejected(#[case] title: &str) {
    let result = TaskTitle::new(title);
    assert_eq!(result, Err(TaskDomainError::EmptyTitle));
}

#[rstest]
fn overlong_title_is_rejected() {
    let title = "x".repeat(101);
    let result = TaskTitle::new(title.clone());
    assert_eq!(result, Err(TaskDomainError::TitleTooLong(title)));
}

#[rstest]
fn blank_body_is_rejected() {
    let result = TaskBody::new(" \n ");
    assert_eq!(result, Err(TaskDomainError::EmptyBody));
}

#[rstest]
fn body_preserves_embedded_line_breaks() {
    let body = TaskBody::new("first line\nsecond line").expect("valid body");
    assert_eq!(body.as_str(), "first line\nsecond line");
}

#[rstest]
fn deadline_parses_datetime_local_format() {
    let deadline = parse_deadline("2026-03-14T09:30").expect("valid deadline");
    assert_eq!(deadline.to_rfc3339(), "2026-03-14T09:30:00+00:00");
}

#[rstest]
#[case("tomorrow")]
#[case("2026-03-14")]
#[case("14/03/2026 09:30")]
#[case("")]
fn malformed_deadline_is_rejected(#[case] input: &str) {
    let result = parse_deadline(input);
    assert_eq!(
        result,
        Err(TaskDomainError::InvalidDeadline(input.to_owned()))
    );
}

#[rstest]
fn new_task_starts_open(clock: DefaultClock) {
    let content =
        TaskContent::parse("Write report", "Quarterly numbers", "2026-06-01T17:00")
            .expect("valid content");
    let task = Task::new(content, &clock);

    assert!(!task.completed());
    assert_eq!(
        task.display_status(task.created_at()),
        DisplayStatus::Open
    );
}

#[rstest]
fn replace_content_keeps_completion_and_creation(clock: DefaultClock) {
    let content = TaskContent::parse("Old title", "Old body", "2026-06-01T17:00")
        .expect("valid content");
    let mut task = Task::new(content, &clock);
    task.set_completed(true);
    let created_at = task.created_at();

    let replacement = TaskContent::parse("New title", "New body", "2026-07-01T08:00")
        .expect("valid content");
    task.replace_content(replacement);

    assert_eq!(task.title().as_str(), "New title");
    assert_eq!(task.body().as_str(), "New body");
    assert!(task.completed());
    assert_eq!(task.created_at(), created_at);
}

#[rstest]
fn set_completed_flips_only_the_flag(clock: DefaultClock) {
    let content = TaskContent::parse("Flip me", "Body", "2026-06-01T17:00")
        .expect("valid content");
    let mut task = Task::new(content, &clock);
    let deadline = task.deadline();

    task.set_completed(true);
    assert!(task.completed());
    assert_eq!(task.deadline(), deadline);

    task.set_completed(false);
    assert!(!task.completed());
}

#[rstest]
fn display_status_tracks_wall_clock(clock: DefaultClock) {
    let content = TaskContent::parse("Deadline drift", "Body", "2026-06-01T12:00")
        .expect("valid content");
    let task = Task::new(content, &clock);

    let before = task.deadline() - Duration::days(3);
    let close = task.deadline() - Duration::hours(3);
    let after = task.deadline() + Duration::seconds(1);

    assert_eq!(task.display_status(before), DisplayStatus::Open);
    assert_eq!(task.display_status(close), DisplayStatus::DueSoon);
    assert_eq!(task.display_status(after), DisplayStatus::Overdue);
}
