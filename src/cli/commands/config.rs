//! Implementation of the `ecs-infra config` commands.

use anyhow::{bail, Result};
use serde::Serialize;

use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::cli::types::ConfigCommands;
use crate::domain::models::{Config, ControllerMapping};
use crate::infrastructure::logging::redact_value;

/// Output of `config show`
#[derive(Debug, Serialize)]
pub struct ShowOutput {
    /// Loaded configuration, printed with credentials redacted
    pub config: Config,
}

impl ShowOutput {
    fn redacted(&self) -> serde_json::Value {
        let mut value = serde_json::to_value(&self.config).unwrap_or_default();
        redact_value(&mut value);
        value
    }
}

impl CommandOutput for ShowOutput {
    fn to_human(&self) -> String {
        serde_yaml::to_string(&self.redacted()).unwrap_or_default()
    }

    fn to_json(&self) -> serde_json::Value {
        self.redacted()
    }
}

/// Output of `config controllers`
#[derive(Debug, Serialize)]
pub struct ControllersOutput {
    /// Mappings to print, in file order
    pub controllers: Vec<ControllerMapping>,
}

impl CommandOutput for ControllersOutput {
    fn to_human(&self) -> String {
        if self.controllers.is_empty() {
            return "No controllers configured.".to_string();
        }
        TableFormatter::new().format_controllers(&self.controllers)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Runs a `config` subcommand against the loaded configuration.
pub fn execute(command: ConfigCommands, config: &Config, json_mode: bool) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let output_data = ShowOutput {
                config: config.clone(),
            };
            output(&output_data, json_mode);
        }
        ConfigCommands::Controllers { name } => {
            let controllers = match name {
                Some(name) => match config.ecs.controller(&name) {
                    Some(controller) => vec![controller.clone()],
                    None => bail!("Controller '{name}' is not configured"),
                },
                None => config.ecs.controllers.clone(),
            };
            output(&ControllersOutput { controllers }, json_mode);
        }
    }
    Ok(())
}
