//! Port contracts for the task context.

pub mod repository;

pub use repository::{
    TaskFilter, TaskOrder, TaskRepository, TaskRepositoryError, TaskRepositoryResult,
};
