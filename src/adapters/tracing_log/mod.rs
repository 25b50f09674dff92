// Tracing log adapter - Structured logging using tracing crate

use std::str::FromStr;

use async_trait::async_trait;
use tracing::{debug, error, info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

use crate::domain::errors::*;
use crate::ports::*;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable text format
    #[default]
    Text,
    /// JSON format for structured logging
    Json,
}

impl FromStr for LogFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(DomainError::BadArgs(format!(
                "Invalid log format: {}. Valid formats: text, json",
                s
            ))),
        }
    }
}

/// Validate a log level name
pub fn parse_log_level(level_str: &str) -> Result<tracing::Level, DomainError> {
    match level_str.to_lowercase().as_str() {
        "trace" => Ok(tracing::Level::TRACE),
        "debug" => Ok(tracing::Level::DEBUG),
        "info" => Ok(tracing::Level::INFO),
        "warn" => Ok(tracing::Level::WARN),
        "error" => Ok(tracing::Level::ERROR),
        _ => Err(DomainError::BadArgs(format!(
            "Invalid log level: {}. Valid levels: trace, debug, info, warn, error",
            level_str
        ))),
    }
}

/// Handle to the installed filter
pub struct LogLevelHandle {
    handle: reload::Handle<EnvFilter, Registry>,
    from_env: bool,
}

impl LogLevelHandle {
    /// Lower the filter to `debug`. No-op when `RUST_LOG` chose the filter.
    pub fn enable_debug(&self) -> Result<(), DomainError> {
        if self.from_env {
            return Ok(());
        }
        self.handle
            .reload(EnvFilter::new("debug"))
            .map_err(|e| DomainError::InternalError(format!("Failed to change log level: {}", e)))
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `level` when set.
/// Returns `None` if a subscriber is already installed.
pub fn init_tracing(level: tracing::Level, format: LogFormat) -> Option<LogLevelHandle> {
    let (filter, from_env) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, true),
        Err(_) => (EnvFilter::new(level.to_string().to_lowercase()), false),
    };
    let (filter, handle) = reload::Layer::new(filter);

    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);
    let installed = match format {
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .try_init(),
    };

    installed.ok().map(|_| LogLevelHandle { handle, from_env })
}

/// Tracing log adapter
pub struct TracingLogAdapter;

impl TracingLogAdapter {
    /// Create new tracing log adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for TracingLogAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LogPort for TracingLogAdapter {
    async fn info(&self, message: &str) {
        info!("{}", message);
    }

    async fn warn(&self, message: &str) {
        warn!("{}", message);
    }

    async fn error(&self, message: &str) {
        error!("{}", message);
    }

    async fn debug(&self, message: &str) {
        debug!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("DEBUG").unwrap(), tracing::Level::DEBUG);
        assert!(parse_log_level("verbose").is_err());
    }

    #[test]
    fn test_log_format() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("Text".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert!("xml".parse::<LogFormat>().is_err());
    }
}
