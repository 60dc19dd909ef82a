//! EventSub Trigger
//!
//! Entry point for the `eventsub-trigger` binary. Prints mock EventSub
//! payloads and topic listings to stdout.

use std::process::ExitCode;

use clap::Parser;
use eventsub_mock::Catalog;
use eventsub_trigger::trigger::{list_topics, trigger_event};
use eventsub_trigger::{logging, Cli, Command, TriggerConfig, TriggerError};
use tracing::error;

fn run(cli: Cli, config: TriggerConfig) -> Result<(), TriggerError> {
    let catalog = Catalog::builtin().with_config(config.resolver);

    match cli.command {
        Command::Trigger(args) => {
            let json = trigger_event(&catalog, &args, &config)?;
            println!("{json}");
        }
        Command::Topics(args) => {
            for topic in list_topics(&catalog, &args) {
                println!("{topic}");
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenv::dotenv();

    let cli = Cli::parse();

    let config = match TriggerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            logging::init(Default::default());
            error!(error = %e, "Failed to load configuration");
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    logging::init(config.log_format);

    if let Err(e) = run(cli, config) {
        error!(error = %e, "Command failed");
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
