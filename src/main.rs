//! ecs-infra CLI entry point.

use std::process;

use clap::Parser;

use ecs_infra::cli::{commands, load_config, Cli, Commands};
use ecs_infra::infrastructure::logging::SecretScrubber;
use ecs_infra::{critical, fmt_error, Diagnostics, LogConfig, LoggerImpl};

fn main() {
    let cli = Cli::parse();

    let bootstrap = Diagnostics::stderr(&LogConfig::default());
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            let message = SecretScrubber::new().scrub_message(&err.to_string());
            fmt_error!(bootstrap, Some(message.as_str()));
            critical!(bootstrap, "unable to load configuration, exiting");
            process::exit(1);
        }
    };

    if let Err(err) = LoggerImpl::init(&config.logging) {
        bootstrap.log_error(Some(&err));
    }
    let diagnostics = Diagnostics::stderr(&config.logging);

    let result = match cli.command {
        Commands::Config(command) => commands::config::execute(command, &config, cli.json),
    };

    if let Err(err) = result {
        let message = SecretScrubber::new().scrub_message(&format!("{err:#}"));
        fmt_error!(diagnostics, Some(message.as_str()));
        process::exit(1);
    }
}
