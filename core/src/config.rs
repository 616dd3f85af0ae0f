//! Adapter configuration.

use serde::Deserialize;

/// Where the backend lives when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Settings for `TodoListAdapter`. The `/todos` path is fixed; only the
/// origin it hangs off can change.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    pub base_url: String,
}

impl AdapterConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
