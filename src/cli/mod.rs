// CLI module
// Command-line definitions for the brainstorm binary

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;

/// Brainstorm - multi-persona idea generation server
#[derive(Debug, Parser)]
#[command(
    name = "brainstorm",
    about = "Collaborative brainstorming server with AI personas",
    version
)]
pub struct Cli {
    /// Path to config file (default: ~/.brainstorm/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute (default: serve)
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP and WebSocket server
    Serve {
        /// Bind address, overriding config and PORT
        #[arg(short, long)]
        bind: Option<String>,

        /// Directory holding the browser UI
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// List the available personas
    Personas,
}

impl Cli {
    /// Layer command-line overrides onto loaded configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(Command::Serve { bind, static_dir }) = &self.command {
            if let Some(bind) = bind {
                config.server.bind_address = bind.clone();
            }
            if let Some(dir) = static_dir {
                config.server.static_dir = Some(dir.clone());
            }
        }
    }
}
