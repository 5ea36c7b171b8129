// Idea records
//
// Field names on the wire follow the browser client (`persona`, `timestamp`)
// while the Rust side uses the descriptive names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Session used when a request does not name one
pub const DEFAULT_SESSION_ID: &str = "default";

/// Raw per-criterion scores keyed by criterion key
pub type RawScores = BTreeMap<String, i64>;

/// A generated idea, owned by the idea store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: Uuid,
    pub session_id: String,
    /// Persona display name captured at generation time
    #[serde(rename = "persona")]
    pub persona_name: String,
    pub prompt: String,
    pub response: String,
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// Absent until the idea is scored for the first time
    pub scores: Option<IdeaScores>,
}

/// The result of one scoring submission. A rescore replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdeaScores {
    pub individual: RawScores,
    pub weighted: f64,
    #[serde(rename = "timestamp")]
    pub scored_at: DateTime<Utc>,
}

impl Idea {
    /// Build a fresh, unscored idea with a new id and the current time.
    ///
    /// A missing or blank session id falls back to [`DEFAULT_SESSION_ID`].
    pub fn new(
        session_id: Option<&str>,
        persona_name: impl Into<String>,
        prompt: impl Into<String>,
        response: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            session_id: normalize_session_id(session_id),
            persona_name: persona_name.into(),
            prompt: prompt.into(),
            response: response.into(),
            created_at: Utc::now(),
            scores: None,
        }
    }

    pub fn is_scored(&self) -> bool {
        self.scores.is_some()
    }
}

/// Resolve an optional session id to the grouping key used by the store.
pub fn normalize_session_id(session_id: Option<&str>) -> String {
    match session_id.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => DEFAULT_SESSION_ID.to_string(),
    }
}
