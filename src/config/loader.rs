// Configuration loader
// Reads ~/.brainstorm/config.toml (or an explicit path), then applies
// environment overrides. CLI flags are layered on top by main.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, ENV_API_KEY, ENV_MODEL, ENV_PORT};
use super::settings::Config;

/// `~/.brainstorm/config.toml`, if a home directory can be determined
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load configuration.
///
/// An explicit `path` must exist. Without one, the default location is used
/// when present and built-in defaults otherwise.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let mut config = match path {
        Some(p) => read_config_file(p)?,
        None => match default_config_path() {
            Some(p) if p.exists() => read_config_file(&p)?,
            _ => {
                tracing::debug!("No config file found, using defaults");
                Config::default()
            }
        },
    };

    apply_env(&mut config, |key| std::env::var(key).ok())?;

    config
        .validate()
        .context("Configuration validation failed")?;

    Ok(config)
}

fn read_config_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;

    tracing::info!(path = %path.display(), "Loaded configuration");
    Ok(config)
}

/// Apply environment overrides using `lookup` to read variables.
///
/// `PORT` replaces only the port of the configured bind address.
pub fn apply_env(config: &mut Config, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
    if let Some(key) = lookup(ENV_API_KEY).filter(|k| !k.trim().is_empty()) {
        config.generation.api_key = Some(key);
    }

    if let Some(model) = lookup(ENV_MODEL).filter(|m| !m.trim().is_empty()) {
        config.generation.model = model;
    }

    if let Some(port) = lookup(ENV_PORT).filter(|p| !p.trim().is_empty()) {
        let port: u16 = port
            .trim()
            .parse()
            .with_context(|| format!("{} must be a port number, got '{}'", ENV_PORT, port))?;
        let mut addr = config.bind_addr()?;
        addr.set_port(port);
        config.server.bind_address = addr.to_string();
    }

    Ok(())
}
