// Brainstorm - multi-persona idea generation server
// Main entry point

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use brainstorm::cli::{Cli, Command};
use brainstorm::config::{load_config, Config};
use brainstorm::personas::PersonaCatalog;
use brainstorm::server::{self, AppState};

const DEFAULT_LOG_FILTER: &str = "brainstorm=info,tower_http=info";
const VERBOSE_LOG_FILTER: &str = "brainstorm=debug,tower_http=debug";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = load_config(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    config.validate().context("Invalid command-line overrides")?;

    match cli.command {
        Some(Command::Personas) => list_personas(&config),
        Some(Command::Serve { .. }) | None => run_server(config).await,
    }
}

/// RUST_LOG wins when set; otherwise info (or debug with --verbose)
fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run_server(config: Config) -> Result<()> {
    let state = Arc::new(AppState::from_config(&config)?);
    server::serve(state, &config.server).await
}

fn list_personas(config: &Config) -> Result<()> {
    let mut catalog = PersonaCatalog::builtin()?;
    if let Some(dir) = &config.personas_dir {
        catalog = catalog.with_dir(dir)?;
    }

    for (key, persona) in catalog.list_all() {
        println!("{:<12} {:<16} {}", key, persona.name, persona.description);
    }
    Ok(())
}
