// Shared application state

use std::sync::Arc;

use anyhow::Result;

use crate::config::Config;
use crate::coordinator::{IdeaGenerationCoordinator, MindmapExpander, ScoringCoordinator};
use crate::personas::PersonaCatalog;
use crate::providers::{create_generator, TextGenerator};
use crate::realtime::SessionBroadcaster;
use crate::scoring::CriteriaTable;
use crate::store::{IdeaStore, InMemoryIdeaStore};

/// Everything the handlers need, wired once at startup
pub struct AppState {
    pub personas: Arc<PersonaCatalog>,
    pub criteria: Arc<CriteriaTable>,
    pub store: Arc<dyn IdeaStore>,
    pub broadcaster: SessionBroadcaster,
    pub brainstorm: IdeaGenerationCoordinator,
    pub scoring: ScoringCoordinator,
    pub mindmap: MindmapExpander,
}

impl AppState {
    pub fn new(
        config: &Config,
        personas: Arc<PersonaCatalog>,
        criteria: Arc<CriteriaTable>,
        generator: Arc<dyn TextGenerator>,
        store: Arc<dyn IdeaStore>,
    ) -> Self {
        let broadcaster = SessionBroadcaster::new();

        Self {
            brainstorm: IdeaGenerationCoordinator::new(
                Arc::clone(&personas),
                Arc::clone(&generator),
                Arc::clone(&store),
                broadcaster.clone(),
            ),
            scoring: ScoringCoordinator::new(
                Arc::clone(&store),
                Arc::clone(&criteria),
                config.scoring.validation,
                broadcaster.clone(),
            ),
            mindmap: MindmapExpander::new(generator),
            personas,
            criteria,
            store,
            broadcaster,
        }
    }

    /// Wire the production state: built-in personas (plus `personas_dir`),
    /// built-in criteria, the configured generator and an in-memory store.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut personas = PersonaCatalog::builtin()?;
        if let Some(dir) = &config.personas_dir {
            personas = personas.with_dir(dir)?;
        }
        tracing::info!(count = personas.len(), "Personas loaded");

        let criteria = CriteriaTable::builtin();
        if !criteria.is_normalized() {
            tracing::warn!(
                weight_sum = criteria.weight_sum(),
                "Scoring weights do not sum to 1.0; weighted scores will not stay within 1..5"
            );
        }

        let generator = create_generator(&config.generation)?;

        Ok(Self::new(
            config,
            Arc::new(personas),
            Arc::new(criteria),
            generator,
            Arc::new(InMemoryIdeaStore::new()),
        ))
    }
}
