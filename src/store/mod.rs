// Idea storage
//
// The store is the single owner of idea records. Callers only ever receive
// clones, so a mutation is observed by re-fetching.

mod memory;

pub use memory::InMemoryIdeaStore;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::Result;
use crate::ideas::{Idea, IdeaScores};

/// Storage contract for idea records
///
/// Implemented in memory today; the async signature leaves room for a
/// database-backed implementation.
#[async_trait]
pub trait IdeaStore: Send + Sync {
    /// Store a new idea. An id collision silently overwrites the old record.
    async fn insert(&self, idea: Idea) -> Result<()>;

    /// Fetch an idea by id
    async fn get(&self, id: &Uuid) -> Result<Idea>;

    /// Replace the whole `scores` object of an idea and return the updated record
    async fn set_scores(&self, id: &Uuid, scores: IdeaScores) -> Result<Idea>;

    /// All ideas in a session, newest first; equal timestamps keep insertion order
    async fn list_by_session(&self, session_id: &str) -> Result<Vec<Idea>>;

    /// Total number of stored ideas
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
