// Idea scoring: validate → compute → replace scores → broadcast
//
// Fetch and write are separate store calls, so two submissions for the same
// idea that interleave resolve as last-writer-wins.

use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::errors::{BrainstormError, Result};
use crate::ideas::{IdeaScores, RawScores};
use crate::realtime::{ServerEvent, SessionBroadcaster};
use crate::scoring::{compute_weighted, CriteriaTable, ScoreValidationPolicy};
use crate::store::IdeaStore;

pub struct ScoringCoordinator {
    store: Arc<dyn IdeaStore>,
    criteria: Arc<CriteriaTable>,
    policy: ScoreValidationPolicy,
    broadcaster: SessionBroadcaster,
}

impl ScoringCoordinator {
    pub fn new(
        store: Arc<dyn IdeaStore>,
        criteria: Arc<CriteriaTable>,
        policy: ScoreValidationPolicy,
        broadcaster: SessionBroadcaster,
    ) -> Self {
        Self {
            store,
            criteria,
            policy,
            broadcaster,
        }
    }

    pub fn criteria(&self) -> &CriteriaTable {
        &self.criteria
    }

    /// Score an idea, replacing any previous scores wholesale.
    ///
    /// Criteria omitted from `raw` are dropped from the stored record.
    pub async fn score(&self, idea_id: &str, raw: RawScores) -> Result<IdeaScores> {
        let id = Uuid::parse_str(idea_id.trim())
            .map_err(|_| BrainstormError::IdeaNotFound(idea_id.to_string()))?;
        let idea = self.store.get(&id).await?;

        let raw = self.policy.apply(raw)?;
        let scores = IdeaScores {
            weighted: compute_weighted(&raw, &self.criteria),
            individual: raw,
            scored_at: Utc::now(),
        };

        if idea.is_scored() {
            tracing::debug!(idea_id = %id, "Replacing existing scores");
        }
        let updated = self.store.set_scores(&id, scores.clone()).await?;

        let delivered = self.broadcaster.publish(
            &updated.session_id,
            ServerEvent::IdeaScored {
                idea_id: id,
                scores: scores.clone(),
            },
        );
        tracing::info!(
            idea_id = %id,
            session_id = %updated.session_id,
            weighted = scores.weighted,
            delivered,
            "Idea scored"
        );

        Ok(scores)
    }
}
