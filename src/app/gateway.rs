//! Session-gated surface over the task lifecycle.

use crate::account::{
    domain::{AccountId, SessionToken},
    ports::{AccountRepository, PasswordHasher, SessionStore},
    services::{AuthError, AuthService},
};
use crate::app::error::{AppError, AppResult};
use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskFilter, TaskOrder, TaskRepository},
    services::{TaskContentRequest, TaskLifecycleService},
};
use mockable::Clock;

/// Task operations behind the authentication gate.
///
/// Every call authenticates the presented token before any task logic
/// runs. Authenticated accounts see and mutate all tasks; there is no
/// per-account partitioning.
pub struct TaskGateway<TR, AR, S, H, C>
where
    TR: TaskRepository,
    AR: AccountRepository,
    S: SessionStore,
    H: PasswordHasher,
    C: Clock + Send + Sync,
{
    tasks: TaskLifecycleService<TR, C>,
    auth: AuthService<AR, S, H, C>,
}

impl<TR, AR, S, H, C> Clone for TaskGateway<TR, AR, S, H, C>
where
    TR: TaskRepository,
    AR: AccountRepository,
    S: SessionStore,
    H: PasswordHasher,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            tasks: self.tasks.clone(),
            auth: self.auth.clone(),
        }
    }
}

impl<TR, AR, S, H, C> TaskGateway<TR, AR, S, H, C>
where
    TR: TaskRepository,
    AR: AccountRepository,
    S: SessionStore,
    H: PasswordHasher,
    C: Clock + Send + Sync,
{
    /// Creates a gateway from the task service and the auth service.
    #[must_use]
    pub const fn new(tasks: TaskLifecycleService<TR, C>, auth: AuthService<AR, S, H, C>) -> Self {
        Self { tasks, auth }
    }

    /// Creates a task.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AuthRequired`] without a valid session, or the
    /// wrapped lifecycle error.
    pub async fn create(
        &self,
        token: SessionToken,
        request: TaskContentRequest,
    ) -> AppResult<Task> {
        self.authorize(token).await?;
        Ok(self.tasks.create(request).await?)
    }

    /// Retrieves a task.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AuthRequired`] without a valid session, or the
    /// wrapped lifecycle error.
    pub async fn get(&self, token: SessionToken, id: TaskId) -> AppResult<Task> {
        self.authorize(token).await?;
        Ok(self.tasks.get(id).await?)
    }

    /// Replaces a task's content fields.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AuthRequired`] without a valid session, or the
    /// wrapped lifecycle error.
    pub async fn update_content(
        &self,
        token: SessionToken,
        id: TaskId,
        request: TaskContentRequest,
    ) -> AppResult<Task> {
        self.authorize(token).await?;
        Ok(self.tasks.update_content(id, request).await?)
    }

    /// Sets a task's completion flag.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AuthRequired`] without a valid session, or the
    /// wrapped lifecycle error.
    pub async fn set_completed(
        &self,
        token: SessionToken,
        id: TaskId,
        completed: bool,
    ) -> AppResult<Task> {
        self.authorize(token).await?;
        Ok(self.tasks.set_completed(id, completed).await?)
    }

    /// Permanently removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AuthRequired`] without a valid session, or the
    /// wrapped lifecycle error.
    pub async fn delete(&self, token: SessionToken, id: TaskId) -> AppResult<()> {
        self.authorize(token).await?;
        Ok(self.tasks.delete(id).await?)
    }

    /// Lists tasks by filter and order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AuthRequired`] without a valid session, or the
    /// wrapped lifecycle error.
    pub async fn list(
        &self,
        token: SessionToken,
        filter: TaskFilter,
        order: TaskOrder,
    ) -> AppResult<Vec<Task>> {
        self.authorize(token).await?;
        Ok(self.tasks.list(filter, order).await?)
    }

    /// Lists open tasks that derive as overdue.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AuthRequired`] without a valid session, or the
    /// wrapped lifecycle error.
    pub async fn list_overdue(&self, token: SessionToken) -> AppResult<Vec<Task>> {
        self.authorize(token).await?;
        Ok(self.tasks.list_overdue().await?)
    }

    /// Lists open tasks that derive as due-soon.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AuthRequired`] without a valid session, or the
    /// wrapped lifecycle error.
    pub async fn list_due_soon(&self, token: SessionToken) -> AppResult<Vec<Task>> {
        self.authorize(token).await?;
        Ok(self.tasks.list_due_soon().await?)
    }

    async fn authorize(&self, token: SessionToken) -> AppResult<AccountId> {
        self.auth.authenticate(token).await.map_err(|err| match err {
            AuthError::NotAuthenticated => {
                tracing::debug!("rejected unauthenticated task operation");
                AppError::AuthRequired
            }
            other => AppError::Auth(other),
        })
    }
}
