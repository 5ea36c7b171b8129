// Idea generation: validate → compose → generate → persist → broadcast

use std::sync::Arc;

use super::prompt::compose_brainstorm_prompt;
use crate::errors::{BrainstormError, Result};
use crate::ideas::Idea;
use crate::personas::{Persona, PersonaCatalog};
use crate::providers::TextGenerator;
use crate::realtime::{ServerEvent, SessionBroadcaster};
use crate::store::IdeaStore;

/// A validated-at-the-boundary brainstorm request
#[derive(Debug, Clone, Default)]
pub struct BrainstormRequest {
    pub prompt: String,
    pub persona: String,
    pub session_id: Option<String>,
    pub context: Option<String>,
}

/// The stored idea plus the persona that produced it
#[derive(Debug, Clone)]
pub struct BrainstormOutcome {
    pub idea: Idea,
    pub persona: Persona,
}

pub struct IdeaGenerationCoordinator {
    personas: Arc<PersonaCatalog>,
    generator: Arc<dyn TextGenerator>,
    store: Arc<dyn IdeaStore>,
    broadcaster: SessionBroadcaster,
}

impl IdeaGenerationCoordinator {
    pub fn new(
        personas: Arc<PersonaCatalog>,
        generator: Arc<dyn TextGenerator>,
        store: Arc<dyn IdeaStore>,
        broadcaster: SessionBroadcaster,
    ) -> Self {
        Self {
            personas,
            generator,
            store,
            broadcaster,
        }
    }

    /// Run one brainstorm request to completion.
    ///
    /// Nothing is stored or broadcast unless generation succeeds.
    pub async fn brainstorm(&self, request: BrainstormRequest) -> Result<BrainstormOutcome> {
        if request.prompt.trim().is_empty() || request.persona.trim().is_empty() {
            return Err(BrainstormError::InvalidInput(
                "Prompt and persona are required".to_string(),
            ));
        }
        let persona = self.personas.lookup(&request.persona)?.clone();

        let full_prompt =
            compose_brainstorm_prompt(&persona, request.context.as_deref(), &request.prompt);

        let response = self.generator.generate(&full_prompt).await.map_err(|e| {
            tracing::error!(
                provider = self.generator.name(),
                persona = %request.persona,
                "Error generating ideas: {:#}",
                e
            );
            BrainstormError::Generation(e)
        })?;

        let idea = Idea::new(
            request.session_id.as_deref(),
            persona.name.clone(),
            request.prompt,
            response,
        );
        self.store.insert(idea.clone()).await?;

        let delivered = self
            .broadcaster
            .publish(&idea.session_id, ServerEvent::NewIdea(idea.clone()));
        tracing::info!(
            idea_id = %idea.id,
            session_id = %idea.session_id,
            persona = %persona.name,
            delivered,
            "Idea generated"
        );

        Ok(BrainstormOutcome { idea, persona })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinator::testing::ScriptedGenerator;
    use crate::store::InMemoryIdeaStore;

    struct Fixture {
        coordinator: IdeaGenerationCoordinator,
        store: InMemoryIdeaStore,
        broadcaster: SessionBroadcaster,
        generator: Arc<ScriptedGenerator>,
    }

    fn fixture(generator: ScriptedGenerator) -> Fixture {
        let store = InMemoryIdeaStore::new();
        let broadcaster = SessionBroadcaster::new();
        let generator = Arc::new(generator);
        let coordinator = IdeaGenerationCoordinator::new(
            Arc::new(PersonaCatalog::builtin().unwrap()),
            generator.clone(),
            Arc::new(store.clone()),
            broadcaster.clone(),
        );
        Fixture {
            coordinator,
            store,
            broadcaster,
            generator,
        }
    }

    fn request(prompt: &str, persona: &str, session: Option<&str>) -> BrainstormRequest {
        BrainstormRequest {
            prompt: prompt.to_string(),
            persona: persona.to_string(),
            session_id: session.map(String::from),
            context: None,
        }
    }

    #[tokio::test]
    async fn test_brainstorm_stores_and_broadcasts() {
        let f = fixture(ScriptedGenerator::replying("1. Rooftop farms"));
        let (conn, mut rx) = f.broadcaster.connect();
        f.broadcaster.join(conn, "abc");

        let outcome = f
            .coordinator
            .brainstorm(request("Urban food", "innovator", Some("abc")))
            .await
            .unwrap();

        assert_eq!(outcome.idea.persona_name, "The Innovator");
        assert_eq!(outcome.idea.response, "1. Rooftop farms");
        assert!(outcome.idea.scores.is_none());
        assert_eq!(outcome.persona.name, "The Innovator");
        assert_eq!(f.store.get(&outcome.idea.id).await.unwrap(), outcome.idea);
        assert_eq!(rx.recv().await.unwrap(), ServerEvent::NewIdea(outcome.idea.clone()));

        let sent = f.generator.prompts();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].contains("Challenge/Topic: Urban food"));
        assert!(sent[0].starts_with("You are an innovative thinker"));
    }

    #[tokio::test]
    async fn test_missing_session_goes_to_default() {
        let f = fixture(ScriptedGenerator::replying("ideas"));
        let outcome = f
            .coordinator
            .brainstorm(request("p", "critic", None))
            .await
            .unwrap();
        assert_eq!(outcome.idea.session_id, "default");
    }

    #[tokio::test]
    async fn test_unknown_persona_has_no_side_effects() {
        let f = fixture(ScriptedGenerator::replying("ideas"));
        let (conn, mut rx) = f.broadcaster.connect();
        f.broadcaster.join(conn, "abc");

        let err = f
            .coordinator
            .brainstorm(request("p", "wizard", Some("abc")))
            .await
            .unwrap_err();

        assert!(matches!(err, BrainstormError::UnknownPersona(_)));
        assert!(f.store.is_empty().await);
        assert!(rx.try_recv().is_err());
        assert!(f.generator.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_blank_prompt_is_invalid() {
        let f = fixture(ScriptedGenerator::replying("ideas"));
        let err = f
            .coordinator
            .brainstorm(request("   ", "critic", None))
            .await
            .unwrap_err();
        assert!(matches!(err, BrainstormError::InvalidInput(_)));

        let err = f
            .coordinator
            .brainstorm(request("p", "", None))
            .await
            .unwrap_err();
        assert!(matches!(err, BrainstormError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_generation_failure_stores_nothing() {
        let f = fixture(ScriptedGenerator::failing("quota exceeded"));
        let (conn, mut rx) = f.broadcaster.connect();
        f.broadcaster.join(conn, "abc");

        let err = f
            .coordinator
            .brainstorm(request("p", "economist", Some("abc")))
            .await
            .unwrap_err();

        assert!(matches!(err, BrainstormError::Generation(_)));
        assert!(f.store.is_empty().await);
        assert!(rx.try_recv().is_err());
    }
}
