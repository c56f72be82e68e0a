//! Figment-based configuration loading

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Project configuration file
pub const CONFIG_FILE: &str = "ecs.yaml";

/// Optional local overrides, not meant to be committed
pub const LOCAL_CONFIG_FILE: &str = "ecs.local.yaml";

/// Prefix for environment overrides; `__` separates nested keys
pub const ENV_PREFIX: &str = "ECS_INFRA_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Explicitly requested file does not exist
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// A specific file could not be parsed into the configuration shape
    #[error("Failed to load config from {}: {source}", path.display())]
    Load {
        /// File that failed
        path: PathBuf,
        /// Underlying figment error
        #[source]
        source: Box<figment::Error>,
    },

    /// Merged sources could not be parsed into the configuration shape
    #[error("Failed to extract configuration: {0}")]
    Extract(#[from] Box<figment::Error>),
}

/// Configuration loader with hierarchical merging
///
/// No validation is applied; absent values stay empty.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging from the working directory
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. `ecs.yaml`
    /// 3. `ecs.local.yaml` (local overrides, optional)
    /// 4. Environment variables (`ECS_INFRA_*`, highest priority)
    pub fn load() -> Result<Config, ConfigError> {
        Self::load_in(Path::new(""))
    }

    /// Same as [`load`](Self::load), reading the YAML files from `dir`.
    pub fn load_in(dir: &Path) -> Result<Config, ConfigError> {
        let config_file = dir.join(CONFIG_FILE);
        let local_file = dir.join(LOCAL_CONFIG_FILE);
        tracing::debug!(
            file = %config_file.display(),
            local = %local_file.display(),
            "loading configuration"
        );

        let config: Config = Self::base()
            .merge(Yaml::file(config_file))
            .merge(Yaml::file(local_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)?;

        Self::loaded(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        tracing::debug!(path = %path.display(), "loading configuration");

        let config: Config = Self::base()
            .merge(Yaml::file(path))
            .extract()
            .map_err(|source| ConfigError::Load {
                path: path.to_path_buf(),
                source: Box::new(source),
            })?;

        Self::loaded(config)
    }

    /// Load configuration from YAML text
    pub fn from_yaml_str(yaml: &str) -> Result<Config, ConfigError> {
        let config: Config = Self::base()
            .merge(Yaml::string(yaml))
            .extract()
            .map_err(Box::new)?;

        Self::loaded(config)
    }

    fn base() -> Figment {
        Figment::new().merge(Serialized::defaults(Config::default()))
    }

    fn loaded(config: Config) -> Result<Config, ConfigError> {
        tracing::info!(
            vcenter = %config.ecs.hypervisor.hostname,
            nsxt = %config.ecs.network_controller.hostname,
            controllers = config.ecs.controllers.len(),
            "configuration loaded"
        );
        Ok(config)
    }
}
