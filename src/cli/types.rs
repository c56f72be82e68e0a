//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level command line
#[derive(Parser, Debug)]
#[command(name = "ecs-infra")]
#[command(about = "Inspect ECS controller host configuration", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Configuration file (default: ecs.yaml, ecs.local.yaml and ECS_INFRA_* variables)
    #[arg(short, long, global = true, env = "ECS_INFRA_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Top-level subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Configuration inspection commands
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// `config` subcommands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the loaded configuration with credentials redacted
    Show,

    /// List controller to VM mappings
    Controllers {
        /// Only show the controller with this name
        #[arg(short, long)]
        name: Option<String>,
    },
}
