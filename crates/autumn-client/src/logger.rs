//! Logger capability used by the client.
//!
//! The client reports API failures through a [`Logger`] rather than a global.
//! The default [`TracingLogger`] emits `tracing` events under the
//! `autumn_client` target, filtered by the configured log level. The library
//! never installs a subscriber.

use std::fmt;
use std::str::FromStr;

use tracing::level_filters::LevelFilter;
use tracing::Level;

use crate::error::AutumnError;

/// Leveled log sink.
///
/// Implementations must not panic; logging never affects a request outcome.
pub trait Logger: Send + Sync + fmt::Debug {
    /// Emit one line at `level`.
    fn log(&self, level: Level, message: &str);

    /// Emit an error line.
    fn error(&self, message: &str) {
        self.log(Level::ERROR, message);
    }

    /// Emit a warning line.
    fn warn(&self, message: &str) {
        self.log(Level::WARN, message);
    }

    /// Emit an informational line.
    fn info(&self, message: &str) {
        self.log(Level::INFO, message);
    }

    /// Emit a debug line.
    fn debug(&self, message: &str) {
        self.log(Level::DEBUG, message);
    }
}

/// Parse a log level name (`error`, `warn`, `info`, `debug`, `trace`, `off`).
///
/// # Errors
///
/// Returns [`AutumnError::Configuration`] for an unknown name.
pub fn parse_log_level(level: &str) -> Result<LevelFilter, AutumnError> {
    LevelFilter::from_str(level.trim())
        .map_err(|_| AutumnError::Configuration(format!("unknown log level: {level}")))
}

/// [`Logger`] backed by `tracing`.
#[derive(Debug, Clone, Copy)]
pub struct TracingLogger {
    filter: LevelFilter,
}

impl TracingLogger {
    /// Create a logger that drops lines more verbose than `filter`.
    #[must_use]
    pub const fn new(filter: LevelFilter) -> Self {
        Self { filter }
    }

    /// The active filter.
    #[must_use]
    pub const fn filter(&self) -> LevelFilter {
        self.filter
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new(LevelFilter::INFO)
    }
}

impl Logger for TracingLogger {
    fn log(&self, level: Level, message: &str) {
        if level > self.filter {
            return;
        }
        if level == Level::ERROR {
            tracing::error!(target: "autumn_client", "[Autumn] {message}");
        } else if level == Level::WARN {
            tracing::warn!(target: "autumn_client", "[Autumn] {message}");
        } else if level == Level::INFO {
            tracing::info!(target: "autumn_client", "[Autumn] {message}");
        } else if level == Level::DEBUG {
            tracing::debug!(target: "autumn_client", "[Autumn] {message}");
        } else {
            tracing::trace!(target: "autumn_client", "[Autumn] {message}");
        }
    }
}
