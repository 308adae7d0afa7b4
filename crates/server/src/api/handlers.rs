use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use extrascout_core::{naming, Candidate, Config, TargetContext};
use serde::Serialize;
use std::sync::Arc;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Error half of every JSON handler result.
pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn api_error(status: StatusCode, error: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
}

/// Unwrap a JSON body, reporting malformed or invalid bodies as 400.
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| api_error(StatusCode::BAD_REQUEST, rejection.body_text()))
}

/// A selected candidate, with the file name it should be saved under when
/// one can be derived.
#[derive(Debug, Serialize)]
pub struct SelectedCandidate {
    #[serde(flatten)]
    pub candidate: Candidate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_filename: Option<String>,
}

impl SelectedCandidate {
    /// Season 0 style name, when season and episode numbers are known.
    pub fn for_episode(
        candidate: Candidate,
        context: &TargetContext,
        season: Option<u32>,
        episode: Option<u32>,
    ) -> Self {
        let suggested_filename = match (season, episode) {
            (Some(season), Some(episode)) => Some(naming::episode_filename(
                context.title(),
                season,
                episode,
                context.secondary_title().unwrap_or(&candidate.title),
            )),
            _ => None,
        };
        Self {
            candidate,
            suggested_filename,
        }
    }

    /// Extras name built from the target title and year.
    pub fn for_extra(candidate: Candidate, context: &TargetContext) -> Self {
        let suggested_filename = Some(naming::extras_filename(
            context.title(),
            context.reference_year(),
            &candidate.title,
        ));
        Self {
            candidate,
            suggested_filename,
        }
    }
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub async fn get_config(State(state): State<Arc<AppState>>) -> Json<Config> {
    Json(state.config().clone())
}
