//! Observability for the framework registry
//!
//! - Structured logging through `tracing`, installed once by [`init_logging`]
//! - Typed lifecycle events ([`Event`]) carried as the `event` field
//! - Operation counters ([`MetricsRegistry`])
//!
//! # Usage
//!
//! ```ignore
//! use framework_registry::observability::{Event, MetricsRegistry};
//!
//! tracing::info!(event = %Event::FrameworkCreated, id = 7, "framework created");
//!
//! let metrics = MetricsRegistry::new();
//! metrics.increment_creates();
//! ```

mod events;
mod metrics;

pub use events::Event;
pub use metrics::{MetricsRegistry, MetricsSnapshot};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter directive, e.g. "info" or "framework_registry=debug,tower_http=info"
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

impl LogConfig {
    /// Check that `level` parses as a filter directive
    pub fn validate(&self) -> ObservabilityResult<()> {
        EnvFilter::try_new(&self.level)
            .map(|_| ())
            .map_err(|e| ObservabilityError::InvalidLevel(format!("'{}': {}", self.level, e)))
    }
}

/// Observability errors
#[derive(Debug, Error)]
pub enum ObservabilityError {
    /// Log level is not a valid filter directive
    #[error("Invalid log level {0}")]
    InvalidLevel(String),

    /// A global subscriber is already installed
    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Result type for observability operations
pub type ObservabilityResult<T> = Result<T, ObservabilityError>;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG`, when set, takes precedence over `config.level`.
pub fn init_logging(config: &LogConfig) -> ObservabilityResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)
            .map_err(|e| ObservabilityError::InvalidLevel(format!("'{}': {}", config.level, e)))?,
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| ObservabilityError::AlreadyInitialized(e.to_string()))
}
