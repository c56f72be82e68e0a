//! Logging section of the configuration file

use serde::{Deserialize, Serialize};

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// When to emit ANSI color sequences
    #[serde(default)]
    pub color: ColorMode,
}

/// ANSI color policy for stderr output
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color only when stderr is a terminal that supports it
    #[default]
    Auto,
    /// Always emit escapes
    Always,
    /// Never emit escapes
    Never,
}

impl ColorMode {
    /// Resolves the mode against the current stderr terminal.
    pub fn enabled(self) -> bool {
        match self {
            Self::Auto => console::colors_enabled_stderr(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            color: ColorMode::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
