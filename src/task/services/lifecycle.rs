//! Service layer for task creation, edits, listing, and deletion.

use crate::task::{
    domain::{DisplayStatus, Task, TaskContent, TaskDomainError, TaskId},
    ports::{TaskFilter, TaskOrder, TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload carrying the three mutable content fields.
///
/// The deadline arrives in the `datetime-local` form representation
/// (`YYYY-MM-DDTHH:MM`) and is validated during orchestration; creation and
/// full-replace updates share this shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskContentRequest {
    title: String,
    body: String,
    deadline: String,
}

impl TaskContentRequest {
    /// Creates a request from raw form fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        deadline: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            deadline: deadline.into(),
        }
    }

    fn into_content(self) -> Result<TaskContent, TaskDomainError> {
        TaskContent::parse(&self.title, &self.body, &self.deadline)
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a new open task from raw form input.
    ///
    /// Validation runs before any repository call; nothing is stored when
    /// input is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] when input validation fails or the
    /// repository rejects persistence.
    pub async fn create(&self, request: TaskContentRequest) -> TaskLifecycleResult<Task> {
        let content = request.into_content()?;
        let task = Task::new(content, &*self.clock);
        self.repository.store(&task).await?;
        tracing::info!(task_id = %task.id(), "task created");
        Ok(task)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] (wrapped) when the task
    /// does not exist, or a persistence error when lookup fails.
    pub async fn get(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.find_by_id_or_error(id).await
    }

    /// Replaces the title, body, and deadline of an existing task.
    ///
    /// The completion flag and creation timestamp are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] when the task is absent, input
    /// validation fails, or persistence fails.
    pub async fn update_content(
        &self,
        id: TaskId,
        request: TaskContentRequest,
    ) -> TaskLifecycleResult<Task> {
        let content = request.into_content()?;
        let mut task = self.find_by_id_or_error(id).await?;
        task.replace_content(content);
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Sets the durable completion flag.
    ///
    /// Only the boolean bit is persisted; derived statuses are never
    /// written back.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] when the task is absent or
    /// persistence fails.
    pub async fn set_completed(&self, id: TaskId, completed: bool) -> TaskLifecycleResult<Task> {
        let mut task = self.find_by_id_or_error(id).await?;
        task.set_completed(completed);
        self.repository.update(&task).await?;
        tracing::debug!(task_id = %id, completed, "completion flag updated");
        Ok(task)
    }

    /// Permanently removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] when the task is absent or
    /// persistence fails; the store is unchanged on failure.
    pub async fn delete(&self, id: TaskId) -> TaskLifecycleResult<()> {
        self.repository.delete(id).await?;
        tracing::info!(task_id = %id, "task deleted");
        Ok(())
    }

    /// Returns tasks matching `filter`, sorted by `order`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the listing fails.
    pub async fn list(
        &self,
        filter: TaskFilter,
        order: TaskOrder,
    ) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.list(filter, order).await?)
    }

    /// Returns open tasks whose derived status is overdue, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the listing fails.
    pub async fn list_overdue(&self) -> TaskLifecycleResult<Vec<Task>> {
        self.list_open_with_status(DisplayStatus::Overdue).await
    }

    /// Returns open tasks whose derived status is due-soon, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the listing fails.
    pub async fn list_due_soon(&self) -> TaskLifecycleResult<Vec<Task>> {
        self.list_open_with_status(DisplayStatus::DueSoon).await
    }

    /// Filters open tasks by freshly derived display status.
    ///
    /// Status is recomputed against the clock on every call; it is never
    /// read from storage.
    async fn list_open_with_status(&self, wanted: DisplayStatus) -> TaskLifecycleResult<Vec<Task>> {
        let mut tasks = self
            .repository
            .list(TaskFilter::Open, TaskOrder::CreatedAtDesc)
            .await?;
        let now = self.clock.utc();
        tasks.retain(|task| task.display_status(now) == wanted);
        Ok(tasks)
    }

    async fn find_by_id_or_error(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| TaskRepositoryError::NotFound(id).into())
    }
}
