// Text generation collaborators
//
// The brainstorm core only needs "prompt in, text out". Anything that can do
// that implements `TextGenerator`, which keeps the model vendor swappable and
// lets tests script responses.

use anyhow::Result;
use async_trait::async_trait;

pub mod factory;
pub mod gemini;

pub use factory::create_generator;
pub use gemini::GeminiProvider;

/// Trait for text-generation backends
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for a single prompt.
    ///
    /// Any failure (network, quota, empty or malformed response) is an error;
    /// callers do not retry.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Provider name (e.g. "gemini")
    fn name(&self) -> &str;

    /// Model used for generation
    fn model(&self) -> &str;
}

/// Stand-in used when no API key is configured.
///
/// Every generation fails, while the rest of the server (personas, scoring,
/// session listing, real-time relay) keeps working.
#[derive(Debug, Clone)]
pub struct UnconfiguredGenerator {
    reason: String,
}

impl UnconfiguredGenerator {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl TextGenerator for UnconfiguredGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        anyhow::bail!("Text generation unavailable: {}", self.reason)
    }

    fn name(&self) -> &str {
        "unconfigured"
    }

    fn model(&self) -> &str {
        "none"
    }
}
