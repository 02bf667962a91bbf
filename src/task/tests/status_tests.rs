//! Unit tests for display-status derivation.

use crate::task::domain::DisplayStatus;
use chrono::{DateTime, Duration, TimeZone, Utc};
use rstest::{fixture, rstest};

#[fixture]
fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

#[rstest]
fn completed_wins_over_past_deadline(now: DateTime<Utc>) {
    let deadline = now - Duration::days(400);
    assert_eq!(
        DisplayStatus::derive(true, deadline, now),
        DisplayStatus::Completed
    );
}

#[rstest]
fn completed_wins_over_future_deadline(now: DateTime<Utc>) {
    let deadline = now + Duration::days(400);
    assert_eq!(
        DisplayStatus::derive(true, deadline, now),
        DisplayStatus::Completed
    );
}

#[rstest]
fn open_task_past_deadline_is_overdue(now: DateTime<Utc>) {
    let deadline = now - Duration::hours(1);
    assert_eq!(
        DisplayStatus::derive(false, deadline, now),
        DisplayStatus::Overdue
    );
}

#[rstest]
fn deadline_equal_to_now_is_overdue_not_due_soon(now: DateTime<Utc>) {
    assert_eq!(
        DisplayStatus::derive(false, now, now),
        DisplayStatus::Overdue
    );
}

#[rstest]
#[case(Duration::minutes(1))]
#[case(Duration::hours(2))]
#[case(Duration::hours(23) + Duration::minutes(59))]
fn open_task_within_a_day_is_due_soon(now: DateTime<Utc>, #[case] slack: Duration) {
    let deadline = now + slack;
    assert_eq!(
        DisplayStatus::derive(false, deadline, now),
        DisplayStatus::DueSoon
    );
}

#[rstest]
fn deadline_exactly_one_day_out_is_open(now: DateTime<Utc>) {
    let deadline = now + Duration::days(1);
    assert_eq!(
        DisplayStatus::derive(false, deadline, now),
        DisplayStatus::Open
    );
}

#[rstest]
fn open_task_with_distant_deadline_is_open(now: DateTime<Utc>) {
    let deadline = now + Duration::days(2);
    assert_eq!(
        DisplayStatus::derive(false, deadline, now),
        DisplayStatus::Open
    );
}

#[rstest]
#[case(DisplayStatus::Open, "open")]
#[case(DisplayStatus::Completed, "completed")]
#[case(DisplayStatus::Overdue, "overdue")]
#[case(DisplayStatus::DueSoon, "due_soon")]
fn as_str_returns_presentation_label(#[case] status: DisplayStatus, #[case] expected: &str) {
    assert_eq!(status.as_str(), expected);
}
