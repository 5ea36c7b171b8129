// Configuration structs

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

use super::constants::DEFAULT_HTTP_ADDR;
use crate::providers::gemini::{DEFAULT_GEMINI_MODEL, GEMINI_BASE_URL};
use crate::scoring::ScoreValidationPolicy;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP / real-time listener settings
    pub server: ServerConfig,

    /// Text generation backend
    pub generation: GenerationConfig,

    /// Score submission handling
    pub scoring: ScoringConfig,

    /// Extra persona TOML files, merged over the built-ins at startup
    pub personas_dir: Option<PathBuf>,
}

/// Listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:5000")
    pub bind_address: String,
    /// Directory served as the browser UI (optional)
    pub static_dir: Option<PathBuf>,
    /// Allow any origin (the browser UI may be hosted elsewhere)
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_HTTP_ADDR.to_string(),
            static_dir: None,
            cors_permissive: true,
        }
    }
}

/// Text generation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Gemini API key. Without one, generation endpoints fail with 500.
    pub api_key: Option<String>,
    /// Model name
    pub model: String,
    /// API root
    pub base_url: String,
    /// Outbound request timeout. Unset means no timeout.
    pub timeout_secs: Option<u64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: GEMINI_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

/// Scoring configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// What to do with raw scores outside 1..=5
    pub validation: ScoreValidationPolicy,
}

impl Config {
    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        self.server
            .bind_address
            .parse()
            .with_context(|| format!("Invalid bind address '{}'", self.server.bind_address))
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        self.bind_addr()?;

        if self.generation.model.trim().is_empty() {
            anyhow::bail!("generation.model must not be empty");
        }
        if self.generation.timeout_secs == Some(0) {
            anyhow::bail!("generation.timeout_secs must be positive (omit it for no timeout)");
        }
        if let Some(key) = &self.generation.api_key {
            if key.trim().is_empty() {
                anyhow::bail!("generation.api_key is set but empty");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        config.validate().unwrap();
        assert_eq!(config.bind_addr().unwrap().port(), 5000);
        assert_eq!(config.generation.model, "gemini-1.5-flash");
        assert_eq!(config.scoring.validation, ScoreValidationPolicy::Accept);
        assert!(config.generation.timeout_secs.is_none());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.server.bind_address = "not-an-address".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.generation.model = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.generation.timeout_secs = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [scoring]
            validation = "reject"

            [generation]
            model = "gemini-2.0-flash"
            "#,
        )
        .unwrap();
        assert_eq!(config.scoring.validation, ScoreValidationPolicy::Reject);
        assert_eq!(config.generation.model, "gemini-2.0-flash");
        assert_eq!(config.generation.base_url, GEMINI_BASE_URL);
        assert_eq!(config.server.bind_address, DEFAULT_HTTP_ADDR);
    }
}
