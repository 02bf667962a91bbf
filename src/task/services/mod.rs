//! Application services for task lifecycle orchestration.

mod lifecycle;

pub use lifecycle::{
    TaskContentRequest, TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService,
};
