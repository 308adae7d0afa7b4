//! Search API handlers.
//!
//! Run the configured search backend and return the selected videos.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use extrascout_core::{ExtrasFinder, TargetContext};
use serde::{Deserialize, Serialize};
use tracing::error;

use super::handlers::{api_error, json_body, ApiError, SelectedCandidate};
use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SearchEpisodeRequest {
    pub context: TargetContext,
    #[serde(default)]
    pub season: Option<u32>,
    #[serde(default)]
    pub episode: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct SearchEpisodeResponse {
    pub selected: Option<SelectedCandidate>,
    /// Query that produced the match.
    pub query: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchExtrasRequest {
    pub context: TargetContext,
}

#[derive(Debug, Serialize)]
pub struct SearchExtrasResponse {
    pub results: Vec<SelectedCandidate>,
}

fn finder(state: &AppState) -> Result<&ExtrasFinder, ApiError> {
    state.finder().ok_or_else(|| {
        api_error(
            StatusCode::SERVICE_UNAVAILABLE,
            "Search backend not configured",
        )
    })
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/v1/search/episode
///
/// Search for a specific episode and return the best match.
pub async fn search_episode(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SearchEpisodeRequest>, JsonRejection>,
) -> Result<Json<SearchEpisodeResponse>, ApiError> {
    let finder = finder(&state)?;
    let body = json_body(payload)?;

    match finder.find_episode(&body.context).await {
        Ok(Some(found)) => Ok(Json(SearchEpisodeResponse {
            selected: Some(SelectedCandidate::for_episode(
                found.candidate,
                &body.context,
                body.season,
                body.episode,
            )),
            query: Some(found.query),
        })),
        Ok(None) => Ok(Json(SearchEpisodeResponse {
            selected: None,
            query: None,
        })),
        Err(e) => {
            error!(searcher = finder.searcher_name(), error = %e, "Episode search failed");
            Err(api_error(StatusCode::BAD_GATEWAY, e.to_string()))
        }
    }
}

/// POST /api/v1/search/extras
///
/// Search for behind-the-scenes videos and return the ranked results.
pub async fn search_extras(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SearchExtrasRequest>, JsonRejection>,
) -> Result<Json<SearchExtrasResponse>, ApiError> {
    let finder = finder(&state)?;
    let body = json_body(payload)?;

    match finder.find_behind_the_scenes(&body.context).await {
        Ok(results) => Ok(Json(SearchExtrasResponse {
            results: results
                .into_iter()
                .map(|c| SelectedCandidate::for_extra(c, &body.context))
                .collect(),
        })),
        Err(e) => {
            error!(searcher = finder.searcher_name(), error = %e, "Behind-the-scenes search failed");
            Err(api_error(StatusCode::BAD_GATEWAY, e.to_string()))
        }
    }
}
