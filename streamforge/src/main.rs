// streamforge/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use streamforge_core::infrastructure::config::locate_config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout is the operator report.
    // RUST_LOG=debug streamforge provision ... for request-level details
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = match locate_config(&cli.dir, cli.config.as_deref()) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(e));
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::Provision {
            settle_seconds,
            poll,
        } => commands::provision::execute(config_path, settle_seconds, poll).await?,
        Commands::Plan { bodies } => commands::plan::execute(config_path, bodies)?,
        Commands::Start => commands::start::execute(config_path).await?,
    }

    Ok(())
}
