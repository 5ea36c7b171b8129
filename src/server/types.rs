// Request and response schemas for the JSON API
//
// Request fields are optional at the serde level so a missing field produces
// the API's own 400 message instead of a deserializer error.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::error::ApiError;
use crate::coordinator::BrainstormRequest;
use crate::ideas::{Idea, IdeaScores, RawScores};
use crate::personas::Persona;
use crate::scoring::CriteriaTable;

/// `Json<T>` whose rejection is an [`ApiError`] in the API's error shape
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// POST /api/brainstorm
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrainstormBody {
    pub prompt: Option<String>,
    pub persona: Option<String>,
    pub session_id: Option<String>,
    pub context: Option<String>,
}

impl BrainstormBody {
    pub fn validate(self) -> Result<BrainstormRequest, ApiError> {
        match (present(self.prompt), present(self.persona)) {
            (Some(prompt), Some(persona)) => Ok(BrainstormRequest {
                prompt,
                persona,
                session_id: self.session_id,
                context: self.context,
            }),
            _ => Err(ApiError::BadRequest(
                "Prompt and persona are required".to_string(),
            )),
        }
    }
}

/// POST /api/score-idea
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreIdeaBody {
    pub idea_id: Option<String>,
    pub scores: Option<RawScores>,
}

impl ScoreIdeaBody {
    pub fn validate(self) -> Result<(String, RawScores), ApiError> {
        match (present(self.idea_id), self.scores) {
            (Some(id), Some(scores)) => Ok((id, scores)),
            _ => Err(ApiError::BadRequest(
                "Idea ID and scores are required".to_string(),
            )),
        }
    }
}

/// POST /api/mindmap-expand
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MindmapExpandBody {
    pub topic: Option<String>,
    #[serde(default)]
    pub current_branches: Vec<String>,
}

impl MindmapExpandBody {
    pub fn validate(self) -> Result<(String, Vec<String>), ApiError> {
        let topic =
            present(self.topic).ok_or_else(|| ApiError::BadRequest("Topic is required".to_string()))?;
        Ok((topic, self.current_branches))
    }
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct BrainstormResponse {
    pub success: bool,
    pub idea: Idea,
    pub persona: Persona,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub success: bool,
    pub scores: IdeaScores,
}

#[derive(Debug, Serialize)]
pub struct SessionIdeasResponse {
    pub success: bool,
    pub ideas: Vec<Idea>,
}

#[derive(Debug, Serialize)]
pub struct PersonasResponse {
    pub success: bool,
    pub personas: BTreeMap<String, Persona>,
}

#[derive(Debug, Serialize)]
pub struct CriteriaResponse {
    pub success: bool,
    pub criteria: CriteriaTable,
}

#[derive(Debug, Serialize)]
pub struct MindmapResponse {
    pub success: bool,
    pub branches: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}
