//! Command-line interface

pub mod commands;
pub mod output;
pub mod types;

use std::path::Path;

use crate::domain::models::Config;
use crate::infrastructure::config::{ConfigError, ConfigLoader};

pub use types::{Cli, Commands, ConfigCommands};

/// Loads `path` when given, otherwise the merged default sources.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}
