//! Page rendering over gateway results.

use super::helpers::{content, context, login};
use agendum::app::MemoryAppContext;
use agendum::task::ports::{TaskFilter, TaskOrder};
use agendum::task::services::TaskContentRequest;
use agendum::view::{TaskView, ViewRenderer};
use chrono::{Duration, Utc};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn index_page_lists_open_tasks_with_derived_status(context: MemoryAppContext) {
    let token = login(&context).await;
    context
        .tasks()
        .create(token, content("Urgent errand", Duration::hours(3)))
        .await
        .expect("create should succeed");

    let open = context
        .tasks()
        .list(token, TaskFilter::Open, TaskOrder::DeadlineAsc)
        .await
        .expect("listing should succeed");
    let views = TaskView::from_tasks(&open, Utc::now());
    let page = ViewRenderer::new()
        .render_index(&views)
        .expect("rendering should succeed");

    assert!(page.contains("Urgent errand"));
    assert!(page.contains("due_soon"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn detail_page_converts_body_line_breaks(context: MemoryAppContext) {
    let token = login(&context).await;
    let created = context
        .tasks()
        .create(
            token,
            TaskContentRequest::new(
                "Shopping",
                "Milk\nEggs",
                (Utc::now() + Duration::days(2))
                    .format("%Y-%m-%dT%H:%M")
                    .to_string(),
            ),
        )
        .await
        .expect("create should succeed");

    let fetched = context
        .tasks()
        .get(token, created.id())
        .await
        .expect("lookup should succeed");
    let view = TaskView::from_task(&fetched, Utc::now());
    let page = ViewRenderer::new()
        .render_task_detail(&view)
        .expect("rendering should succeed");

    assert!(page.contains("Milk<br>Eggs"));
}
