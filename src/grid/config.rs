//! Paging configuration.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::GridError;

/// Environment variable overriding [`GridConfig::lookahead`].
pub const ENV_LOOKAHEAD: &str = "PAGEGRID_LOOKAHEAD";
/// Environment variable overriding [`GridConfig::page_size`].
pub const ENV_PAGE_SIZE: &str = "PAGEGRID_PAGE_SIZE";
/// Environment variable overriding [`GridConfig::initial_visible`].
pub const ENV_INITIAL_VISIBLE: &str = "PAGEGRID_INITIAL_VISIBLE";
/// Environment variable overriding [`GridConfig::coalesce_delay`], in milliseconds.
pub const ENV_COALESCE_MS: &str = "PAGEGRID_COALESCE_MS";

/// Error loading a [`GridConfig`] from a file or string.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Invalid(#[from] GridError),
}

/// Paging constants for a [`GridController`](super::GridController).
///
/// # Example
///
/// ```ignore
/// use pagegrid::grid::GridConfig;
/// use std::time::Duration;
///
/// let config = GridConfig::default()
///     .with_page_size(20)
///     .with_coalesce_delay(Duration::from_millis(250));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Distance from the end of the window at which the next page is requested
    pub lookahead: usize,
    /// Items revealed per page
    pub page_size: usize,
    /// Items revealed before any paging
    pub initial_visible: usize,
    /// Debounce window merging near-simultaneous paging triggers
    #[serde(with = "millis")]
    pub coalesce_delay: Duration,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            lookahead: 10,
            page_size: 10,
            initial_visible: 20,
            coalesce_delay: Duration::from_millis(500),
        }
    }
}

impl GridConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lookahead(mut self, lookahead: usize) -> Self {
        self.lookahead = lookahead;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_initial_visible(mut self, initial_visible: usize) -> Self {
        self.initial_visible = initial_visible;
        self
    }

    pub fn with_coalesce_delay(mut self, delay: Duration) -> Self {
        self.coalesce_delay = delay;
        self
    }

    /// Defaults overridden by any `PAGEGRID_*` environment variables.
    ///
    /// Unparseable values are logged and ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(v) = env_number(ENV_LOOKAHEAD) {
            config.lookahead = v as usize;
        }
        if let Some(v) = env_number(ENV_PAGE_SIZE) {
            config.page_size = v as usize;
        }
        if let Some(v) = env_number(ENV_INITIAL_VISIBLE) {
            config.initial_visible = v as usize;
        }
        if let Some(v) = env_number(ENV_COALESCE_MS) {
            config.coalesce_delay = Duration::from_millis(v);
        }
        config
    }

    /// Parse a JSON object; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Reject constants the grid cannot page with.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.page_size == 0 {
            return Err(GridError::InvalidConfig {
                field: "page_size",
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

fn env_number(name: &str) -> Option<u64> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse::<u64>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(var = name, value = %raw, "Ignoring unparseable grid setting");
            None
        }
    }
}

mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(delay: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(delay.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_millis(u64::deserialize(deserializer)?))
    }
}
