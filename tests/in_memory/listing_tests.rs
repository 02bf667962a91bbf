//! Filter/order combinations and derived subsets through the gateway.

use super::helpers::{assert_single_task, content, context, login};
use agendum::app::MemoryAppContext;
use agendum::task::domain::TaskId;
use agendum::task::ports::{TaskFilter, TaskOrder};
use chrono::Duration;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn open_tasks_sort_soonest_deadline_first(context: MemoryAppContext) {
    let token = login(&context).await;
    let far = context
        .tasks()
        .create(token, content("Far", Duration::days(9)))
        .await
        .expect("create should succeed");
    let near = context
        .tasks()
        .create(token, content("Near", Duration::days(1)))
        .await
        .expect("create should succeed");
    let middle = context
        .tasks()
        .create(token, content("Middle", Duration::days(4)))
        .await
        .expect("create should succeed");

    let open = context
        .tasks()
        .list(token, TaskFilter::Open, TaskOrder::DeadlineAsc)
        .await
        .expect("listing should succeed");

    let ids: Vec<TaskId> = open.iter().map(|task| task.id()).collect();
    assert_eq!(ids, vec![near.id(), middle.id(), far.id()]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn filter_and_order_axes_combine_independently(context: MemoryAppContext) {
    let token = login(&context).await;
    let first = context
        .tasks()
        .create(token, content("First", Duration::days(2)))
        .await
        .expect("create should succeed");
    let second = context
        .tasks()
        .create(token, content("Second", Duration::days(1)))
        .await
        .expect("create should succeed");
    context
        .tasks()
        .set_completed(token, first.id(), true)
        .await
        .expect("completion should succeed");

    let all_by_created = context
        .tasks()
        .list(token, TaskFilter::All, TaskOrder::CreatedAtAsc)
        .await
        .expect("listing should succeed");
    let completed_newest_first = context
        .tasks()
        .list(token, TaskFilter::Completed, TaskOrder::CreatedAtDesc)
        .await
        .expect("listing should succeed");
    let open_by_deadline = context
        .tasks()
        .list(token, TaskFilter::Open, TaskOrder::DeadlineAsc)
        .await
        .expect("listing should succeed");

    let all_ids: Vec<TaskId> = all_by_created.iter().map(|task| task.id()).collect();
    assert_eq!(all_ids, vec![first.id(), second.id()]);
    let completed_ids: Vec<TaskId> = completed_newest_first
        .iter()
        .map(|task| task.id())
        .collect();
    assert_eq!(completed_ids, vec![first.id()]);
    let open_ids: Vec<TaskId> = open_by_deadline.iter().map(|task| task.id()).collect();
    assert_eq!(open_ids, vec![second.id()]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn derived_subsets_recompute_against_the_clock(context: MemoryAppContext) {
    let token = login(&context).await;
    let late = context
        .tasks()
        .create(token, content("Late", -Duration::hours(3)))
        .await
        .expect("create should succeed");
    let urgent = context
        .tasks()
        .create(token, content("Urgent", Duration::hours(5)))
        .await
        .expect("create should succeed");
    context
        .tasks()
        .create(token, content("Comfortable", Duration::days(6)))
        .await
        .expect("create should succeed");

    let overdue = context
        .tasks()
        .list_overdue(token)
        .await
        .expect("overdue listing should succeed");
    let due_soon = context
        .tasks()
        .list_due_soon(token)
        .await
        .expect("due-soon listing should succeed");

    assert_single_task(&overdue, late.id()).expect("exactly one overdue task");
    assert_single_task(&due_soon, urgent.id()).expect("exactly one due-soon task");
}
