//! Global tracing subscriber setup

use std::io;

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use super::config::LogConfig;

/// Logger initialization errors
#[derive(Error, Debug)]
pub enum LoggingError {
    /// Level is not one of trace, debug, info, warn, error
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLevel(String),

    /// A global subscriber is already installed
    #[error("Failed to install global subscriber: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Process logger backed by `tracing-subscriber`
pub struct LoggerImpl {
    ansi: bool,
}

impl LoggerImpl {
    /// Initialize the global subscriber with the given configuration
    ///
    /// `RUST_LOG` overrides the configured level when set.
    ///
    /// # Errors
    /// Returns an error if the level is invalid or a global subscriber is
    /// already installed
    pub fn init(config: &LogConfig) -> Result<Self, LoggingError> {
        let default_level = parse_log_level(&config.level)?;
        let ansi = config.color.enabled();

        let env_filter = EnvFilter::builder()
            .with_default_directive(default_level.into())
            .from_env_lossy();

        let stderr_layer = tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_ansi(ansi)
            .with_target(true)
            .with_filter(env_filter);

        tracing_subscriber::registry().with(stderr_layer).try_init()?;

        tracing::debug!(level = %config.level, ansi, "logger initialized");

        Ok(Self { ansi })
    }

    /// Whether the subscriber emits ANSI escapes
    pub const fn ansi(&self) -> bool {
        self.ansi
    }
}

/// Parse log level string to Level
pub fn parse_log_level(level: &str) -> Result<Level, LoggingError> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(LoggingError::InvalidLevel(level.to_string())),
    }
}
