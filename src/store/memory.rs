// In-memory idea store
//
// A single RwLock guards the whole map, so `set_scores` swaps the scores
// object under the write lock and no reader can see a half-written record.

use async_trait::async_trait;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::IdeaStore;
use crate::errors::{BrainstormError, Result};
use crate::ideas::{Idea, IdeaScores};

struct Entry {
    idea: Idea,
    /// Insertion sequence, used as the tie-break for equal timestamps
    seq: u64,
}

#[derive(Default)]
struct Inner {
    ideas: HashMap<Uuid, Entry>,
    next_seq: u64,
}

/// Process-lifetime idea store. Clone freely (it's an Arc inside).
#[derive(Clone, Default)]
pub struct InMemoryIdeaStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryIdeaStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IdeaStore for InMemoryIdeaStore {
    async fn insert(&self, idea: Idea) -> Result<()> {
        let mut inner = self.inner.write().await;
        let seq = inner.next_seq;
        inner.next_seq += 1;

        if inner.ideas.contains_key(&idea.id) {
            tracing::warn!(idea_id = %idea.id, "Idea id collision, overwriting existing record");
        }
        inner.ideas.insert(idea.id, Entry { idea, seq });
        Ok(())
    }

    async fn get(&self, id: &Uuid) -> Result<Idea> {
        let inner = self.inner.read().await;
        inner
            .ideas
            .get(id)
            .map(|e| e.idea.clone())
            .ok_or_else(|| BrainstormError::IdeaNotFound(id.to_string()))
    }

    async fn set_scores(&self, id: &Uuid, scores: IdeaScores) -> Result<Idea> {
        let mut inner = self.inner.write().await;
        let entry = inner
            .ideas
            .get_mut(id)
            .ok_or_else(|| BrainstormError::IdeaNotFound(id.to_string()))?;
        entry.idea.scores = Some(scores);
        Ok(entry.idea.clone())
    }

    async fn list_by_session(&self, session_id: &str) -> Result<Vec<Idea>> {
        let inner = self.inner.read().await;
        let mut matching: Vec<&Entry> = inner
            .ideas
            .values()
            .filter(|e| e.idea.session_id == session_id)
            .collect();
        matching.sort_by_key(|e| (Reverse(e.idea.created_at), e.seq));
        Ok(matching.into_iter().map(|e| e.idea.clone()).collect())
    }

    async fn len(&self) -> usize {
        self.inner.read().await.ideas.len()
    }
}
