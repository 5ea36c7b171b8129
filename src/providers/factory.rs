// Provider factory
//
// Creates the text generator from generation configuration

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;

use super::gemini::GeminiProvider;
use super::{TextGenerator, UnconfiguredGenerator};
use crate::config::constants::ENV_API_KEY;
use crate::config::GenerationConfig;

/// Create the generator used by every generation flow.
///
/// A missing API key is not fatal: the server starts and generation requests
/// fail until a key is configured.
pub fn create_generator(config: &GenerationConfig) -> Result<Arc<dyn TextGenerator>> {
    let Some(api_key) = config.api_key.clone() else {
        tracing::warn!(
            "No Gemini API key configured (set {} or generation.api_key); generation requests will fail",
            ENV_API_KEY
        );
        return Ok(Arc::new(UnconfiguredGenerator::new(format!(
            "{} not set",
            ENV_API_KEY
        ))));
    };

    let provider = GeminiProvider::new(api_key, config.timeout_secs.map(Duration::from_secs))?
        .with_model(config.model.clone())
        .with_base_url(config.base_url.clone());

    tracing::info!(
        model = %config.model,
        timeout_secs = ?config.timeout_secs,
        "Gemini text generator ready"
    );
    Ok(Arc::new(provider))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_no_api_key_gives_failing_generator() {
        let generator = create_generator(&GenerationConfig::default()).unwrap();
        assert_eq!(generator.name(), "unconfigured");
        assert!(generator.generate("hello").await.is_err());
    }

    #[test]
    fn test_api_key_gives_gemini() {
        let config = GenerationConfig {
            api_key: Some("test-key".to_string()),
            model: "gemini-1.5-pro".to_string(),
            timeout_secs: Some(30),
            ..Default::default()
        };
        let generator = create_generator(&config).unwrap();
        assert_eq!(generator.name(), "gemini");
        assert_eq!(generator.model(), "gemini-1.5-pro");
    }
}
