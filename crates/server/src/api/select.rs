//! Selection API handlers.
//!
//! Score caller-supplied candidates without running a search.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use extrascout_core::{Candidate, CandidateError, TargetContext};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::handlers::{api_error, json_body, ApiError, SelectedCandidate};
use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SelectEpisodeRequest {
    pub context: TargetContext,
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub min_score: Option<f64>,
    /// Season number, used for the suggested file name.
    #[serde(default)]
    pub season: Option<u32>,
    /// Episode number, used for the suggested file name.
    #[serde(default)]
    pub episode: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct SelectEpisodeResponse {
    pub selected: Option<SelectedCandidate>,
    pub min_score: f64,
}

#[derive(Debug, Deserialize)]
pub struct SelectExtrasRequest {
    pub context: TargetContext,
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub min_score: Option<f64>,
    #[serde(default)]
    pub max_results: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct SelectExtrasResponse {
    pub results: Vec<SelectedCandidate>,
    pub min_score: f64,
    pub max_results: usize,
}

/// Reject candidates without a usable id.
fn validate_candidates(candidates: &[Candidate]) -> Result<(), ApiError> {
    if candidates.iter().any(|c| c.id.trim().is_empty()) {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            CandidateError::MissingField("id").to_string(),
        ));
    }
    Ok(())
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/v1/select/episode
///
/// Pick the best episode match among the given candidates.
pub async fn select_episode(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SelectEpisodeRequest>, JsonRejection>,
) -> Result<Json<SelectEpisodeResponse>, ApiError> {
    let body = json_body(payload)?;
    validate_candidates(&body.candidates)?;

    let min_score = body
        .min_score
        .unwrap_or(state.selector().config().episode_min_score);
    debug!(
        title = %body.context.title(),
        candidates = body.candidates.len(),
        min_score,
        "Selecting episode match"
    );

    let selected = state
        .selector()
        .select_best(body.candidates, &body.context, Some(min_score))
        .map(|c| SelectedCandidate::for_episode(c, &body.context, body.season, body.episode));

    Ok(Json(SelectEpisodeResponse {
        selected,
        min_score,
    }))
}

/// POST /api/v1/select/extras
///
/// Rank the given candidates as behind-the-scenes material.
pub async fn select_extras(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SelectExtrasRequest>, JsonRejection>,
) -> Result<Json<SelectExtrasResponse>, ApiError> {
    let body = json_body(payload)?;
    validate_candidates(&body.candidates)?;

    let config = state.selector().config();
    let min_score = body.min_score.unwrap_or(config.extras_min_score);
    let max_results = body.max_results.unwrap_or(config.max_results);

    let results = state
        .selector()
        .select_ranked(
            body.candidates,
            &body.context,
            Some(min_score),
            Some(max_results),
        )
        .into_iter()
        .map(|c| SelectedCandidate::for_extra(c, &body.context))
        .collect();

    Ok(Json(SelectExtrasResponse {
        results,
        min_score,
        max_results,
    }))
}
