// HTTP request handlers

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use std::sync::Arc;

use super::error::{ApiError, ApiResult, GENERATION_FAILED, MINDMAP_FAILED};
use super::state::AppState;
use super::types::{
    ApiJson, BrainstormBody, BrainstormResponse, CriteriaResponse, HealthResponse,
    MindmapExpandBody, MindmapResponse, PersonasResponse, ScoreIdeaBody, ScoreResponse,
    SessionIdeasResponse,
};

/// Message returned when the scoring flow fails for a non-client reason
const SCORING_FAILED: &str = "Failed to score idea";

/// POST /api/brainstorm
pub async fn brainstorm(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<BrainstormBody>,
) -> ApiResult<Json<BrainstormResponse>> {
    let request = body.validate()?;
    let outcome = state
        .brainstorm
        .brainstorm(request)
        .await
        .map_err(|e| ApiError::from_core(e, GENERATION_FAILED))?;

    Ok(Json(BrainstormResponse {
        success: true,
        idea: outcome.idea,
        persona: outcome.persona,
    }))
}

/// POST /api/score-idea
pub async fn score_idea(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<ScoreIdeaBody>,
) -> ApiResult<Json<ScoreResponse>> {
    let (idea_id, raw) = body.validate()?;
    let scores = state
        .scoring
        .score(&idea_id, raw)
        .await
        .map_err(|e| ApiError::from_core(e, SCORING_FAILED))?;

    Ok(Json(ScoreResponse {
        success: true,
        scores,
    }))
}

/// GET /api/session/:session_id/ideas
pub async fn session_ideas(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> ApiResult<Json<SessionIdeasResponse>> {
    let ideas = state
        .store
        .list_by_session(&session_id)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(SessionIdeasResponse {
        success: true,
        ideas,
    }))
}

/// GET /api/personas
pub async fn personas(State(state): State<Arc<AppState>>) -> Json<PersonasResponse> {
    Json(PersonasResponse {
        success: true,
        personas: state.personas.list_all().clone(),
    })
}

/// GET /api/scoring-criteria
pub async fn scoring_criteria(State(state): State<Arc<AppState>>) -> Json<CriteriaResponse> {
    Json(CriteriaResponse {
        success: true,
        criteria: state.criteria.as_ref().clone(),
    })
}

/// POST /api/mindmap-expand
pub async fn mindmap_expand(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<MindmapExpandBody>,
) -> ApiResult<Json<MindmapResponse>> {
    let (topic, current_branches) = body.validate()?;
    let branches = state
        .mindmap
        .expand(&topic, &current_branches)
        .await
        .map_err(|e| ApiError::from_core(e, MINDMAP_FAILED))?;

    Ok(Json(MindmapResponse {
        success: true,
        branches,
    }))
}

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "AI Brainstorming Server is running!".to_string(),
        timestamp: Utc::now(),
    })
}
