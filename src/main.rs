// src/main.rs — Academic Tracker entry point

use clap::Parser;
use std::path::Path;

use academic_tracker::backend::HttpSource;
use academic_tracker::cli::{Cli, Commands};
use academic_tracker::infra::config::{Config, BACKEND_URL_ENV};
use academic_tracker::infra::logger;
use academic_tracker::tui::{self, Tab};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging (respects RUST_LOG)
    logger::init_logging(if cli.verbose { "debug" } else { "warn" });

    // Load config (falls back to defaults if no config.toml)
    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from(Path::new(path))?,
        None => Config::load()?,
    };

    let backend = config
        .backend
        .with_overrides(cli.backend.clone(), std::env::var(BACKEND_URL_ENV).ok());
    let source = HttpSource::new(&backend)?;
    tracing::debug!(base_url = source.base_url(), "backend resolved");

    match cli.command.unwrap_or(Commands::Dashboard) {
        Commands::Dashboard => tui::run_dashboard(&source).await,
        Commands::Show { tab } => {
            let tab: Tab = tab.parse().map_err(anyhow::Error::msg)?;
            academic_tracker::cli::show::run_show(&source, tab).await
        }
        Commands::Export { output } => {
            academic_tracker::cli::export::run_export(&source, output.as_deref()).await
        }
    }
}
