//! Resviz CLI - Network Degradation Simulator
//!
//! Command-line interface for the Resviz simulation core.

use clap::Parser;
use env_logger::Env;
use log::info;

use resviz::cli::{commands, Cli, Commands};
use resviz::config::SimulationConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    info!("Resviz v{}", env!("CARGO_PKG_VERSION"));

    let mut config = match &cli.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };

    match cli.command {
        Some(Commands::Run {
            depth,
            tick_ms,
            json,
        }) => {
            if let Some(tick_ms) = tick_ms {
                config.tick_ms = tick_ms;
                config.validate()?;
            }
            commands::run(&config, depth, json).await?;
        }
        Some(Commands::Table { depth, json }) => {
            commands::table(&config, depth, json)?;
        }
        None => {
            println!("Resviz v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
        }
    }

    Ok(())
}
