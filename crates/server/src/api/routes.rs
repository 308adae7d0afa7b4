use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::{handlers, search, select};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    // API routes
    let api_routes = Router::new()
        // Health and config
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        // Selection over caller-supplied candidates
        .route("/select/episode", post(select::select_episode))
        .route("/select/extras", post(select::select_extras))
        // Search through the configured backend
        .route("/search/episode", post(search::search_episode))
        .route("/search/extras", post(search::search_extras))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
}
