//! Explicit application wiring.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};

use crate::account::{
    adapters::{
        Sha256PasswordHasher,
        memory::{InMemoryAccountRepository, InMemorySessionStore},
        postgres::PostgresAccountRepository,
    },
    ports::{AccountRepository, PasswordHasher, SessionStore},
    services::{AuthService, RegistrationService},
};
use crate::app::config::AppConfig;
use crate::app::gateway::TaskGateway;
use crate::task::{
    adapters::{
        memory::InMemoryTaskRepository,
        postgres::{PostgresTaskRepository, TaskPgPool},
    },
    ports::TaskRepository,
    services::TaskLifecycleService,
};

/// Fully wired application context.
///
/// Constructed once at process start from an [`AppConfig`]; every
/// component receives its collaborators here and nothing reads ambient
/// process state afterwards.
pub struct AppContext<TR, AR, S, H, C>
where
    TR: TaskRepository,
    AR: AccountRepository,
    S: SessionStore,
    H: PasswordHasher,
    C: Clock + Send + Sync,
{
    config: AppConfig,
    registration: RegistrationService<AR, H>,
    auth: AuthService<AR, S, H, C>,
    tasks: TaskGateway<TR, AR, S, H, C>,
}

impl<TR, AR, S, H, C> Clone for AppContext<TR, AR, S, H, C>
where
    TR: TaskRepository,
    AR: AccountRepository,
    S: SessionStore,
    H: PasswordHasher,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            registration: self.registration.clone(),
            auth: self.auth.clone(),
            tasks: self.tasks.clone(),
        }
    }
}

/// Context wired against the in-memory adapters.
pub type MemoryAppContext = AppContext<
    InMemoryTaskRepository,
    InMemoryAccountRepository,
    InMemorySessionStore,
    Sha256PasswordHasher,
    DefaultClock,
>;

/// Context wired against the `PostgreSQL` adapters.
///
/// Sessions stay in memory: the surface holds only the token in a cookie,
/// so a restart logs everyone out rather than leaving stale rows behind.
pub type PostgresAppContext = AppContext<
    PostgresTaskRepository,
    PostgresAccountRepository,
    InMemorySessionStore,
    Sha256PasswordHasher,
    DefaultClock,
>;

impl<TR, AR, S, H, C> AppContext<TR, AR, S, H, C>
where
    TR: TaskRepository,
    AR: AccountRepository,
    S: SessionStore,
    H: PasswordHasher,
    C: Clock + Send + Sync,
{
    /// Wires a context from explicitly constructed components.
    #[must_use]
    pub fn assemble(
        config: AppConfig,
        task_repository: Arc<TR>,
        account_repository: Arc<AR>,
        session_store: Arc<S>,
        hasher: Arc<H>,
        clock: Arc<C>,
    ) -> Self {
        let tasks = TaskLifecycleService::new(task_repository, Arc::clone(&clock));
        let auth = AuthService::new(
            Arc::clone(&account_repository),
            session_store,
            Arc::clone(&hasher),
            clock,
        );
        Self {
            config,
            registration: RegistrationService::new(account_repository, hasher),
            tasks: TaskGateway::new(tasks, auth.clone()),
            auth,
        }
    }

    /// Returns the process configuration.
    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the registration service.
    #[must_use]
    pub const fn registration(&self) -> &RegistrationService<AR, H> {
        &self.registration
    }

    /// Returns the authentication service.
    #[must_use]
    pub const fn auth(&self) -> &AuthService<AR, S, H, C> {
        &self.auth
    }

    /// Returns the session-gated task surface.
    #[must_use]
    pub const fn tasks(&self) -> &TaskGateway<TR, AR, S, H, C> {
        &self.tasks
    }
}

impl MemoryAppContext {
    /// Wires a context against the in-memory adapters.
    #[must_use]
    pub fn in_memory(config: AppConfig) -> Self {
        Self::assemble(
            config,
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(InMemoryAccountRepository::new()),
            Arc::new(InMemorySessionStore::new()),
            Arc::new(Sha256PasswordHasher::new()),
            Arc::new(DefaultClock),
        )
    }
}

impl PostgresAppContext {
    /// Wires a context against a `PostgreSQL` connection pool.
    #[must_use]
    pub fn with_postgres(config: AppConfig, pool: TaskPgPool) -> Self {
        Self::assemble(
            config,
            Arc::new(PostgresTaskRepository::new(pool.clone())),
            Arc::new(PostgresAccountRepository::new(pool)),
            Arc::new(InMemorySessionStore::new()),
            Arc::new(Sha256PasswordHasher::new()),
            Arc::new(DefaultClock),
        )
    }
}
