//! Process configuration.

use serde::{Deserialize, Serialize};

/// Environment variable naming the `PostgreSQL` connection string.
const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Environment variable naming an optional template override directory.
const TEMPLATE_DIR_VAR: &str = "AGENDUM_TEMPLATE_DIR";

/// Configuration read once at process start and passed into the context.
///
/// Also deserializable from a JSON payload for supervised deployments that
/// hand configuration over on a file descriptor instead of the
/// environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// `PostgreSQL` connection string; `None` selects in-memory wiring.
    #[serde(default)]
    pub database_url: Option<String>,
    /// Directory holding template overrides; `None` uses the embedded set.
    #[serde(default)]
    pub template_dir: Option<String>,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var(DATABASE_URL_VAR).ok(),
            template_dir: std::env::var(TEMPLATE_DIR_VAR).ok(),
        }
    }

    /// Parses configuration from a JSON payload.
    ///
    /// # Errors
    ///
    /// Returns the parse error when the payload does not deserialize into
    /// this shape.
    pub fn from_json(payload: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(payload)
    }
}
