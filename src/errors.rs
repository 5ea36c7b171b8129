// Error taxonomy for the brainstorm core
//
// Client-facing failures (bad input, unknown persona, unknown idea) are kept
// apart from upstream generation failures so the HTTP layer can map each to
// the right status without inspecting message text.

use thiserror::Error;

/// Errors produced by the store, scoring and coordinator layers
#[derive(Debug, Error)]
pub enum BrainstormError {
    /// Missing or malformed request field
    #[error("{0}")]
    InvalidInput(String),

    /// Persona key not present in the catalog
    #[error("Invalid persona selected: {0}")]
    UnknownPersona(String),

    /// Idea id not present in the store
    #[error("Idea not found: {0}")]
    IdeaNotFound(String),

    /// Raw score outside 1..=5 under the `reject` validation policy
    #[error("Score for '{criterion}' must be between 1 and 5, got {score}")]
    ScoreOutOfRange { criterion: String, score: i64 },

    /// The text-generation collaborator failed (timeout, quota, bad response)
    #[error("Text generation failed")]
    Generation(#[source] anyhow::Error),
}

impl BrainstormError {
    /// True for errors caused by the caller's input (4xx family)
    pub fn is_client_error(&self) -> bool {
        !matches!(self, BrainstormError::Generation(_))
    }
}

pub type Result<T> = std::result::Result<T, BrainstormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_classification() {
        assert!(BrainstormError::InvalidInput("x".into()).is_client_error());
        assert!(BrainstormError::UnknownPersona("wizard".into()).is_client_error());
        assert!(BrainstormError::IdeaNotFound("abc".into()).is_client_error());
        assert!(!BrainstormError::Generation(anyhow::anyhow!("quota")).is_client_error());
    }

    #[test]
    fn test_generation_error_hides_cause_in_display() {
        let err = BrainstormError::Generation(anyhow::anyhow!("API key leaked-123 rejected"));
        assert_eq!(err.to_string(), "Text generation failed");
    }
}
