//! Application composition and the session-gated operation surface.
//!
//! There is no ambient global state: [`AppConfig`] is read once at process
//! start and [`AppContext`] wires every component explicitly. The routing
//! layer holds one context and calls through it.

mod config;
mod context;
mod error;
mod gateway;

pub use config::AppConfig;
pub use context::{AppContext, MemoryAppContext, PostgresAppContext};
pub use error::{AppError, AppResult};
pub use gateway::TaskGateway;
