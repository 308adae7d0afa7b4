//! Types for the video search system.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::candidate::Candidate;

/// Query parameters for a video search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Free-text search query.
    pub query: String,
    /// Maximum results to request.
    pub limit: usize,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>, limit: usize) -> Self {
        Self {
            query: query.into(),
            limit,
        }
    }
}

/// Search result with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// The search query that was executed.
    pub query: SearchQuery,
    /// Usable results, in the order the backend returned them.
    pub candidates: Vec<Candidate>,
    /// Entries dropped because they lacked an id or title.
    #[serde(default)]
    pub skipped: usize,
    /// How long the search took in milliseconds.
    pub duration_ms: u64,
    pub searched_at: DateTime<Utc>,
}

/// Errors that can occur during search operations.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Search binary not found: {}", path.display())]
    BinaryNotFound { path: PathBuf },

    #[error("Search command failed: {0}")]
    CommandFailed(String),

    #[error("Search timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("Invalid search response: {0}")]
    InvalidResponse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for video search backends.
#[async_trait]
pub trait Searcher: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &str;

    /// Execute a search.
    async fn search(&self, query: &SearchQuery) -> Result<SearchResult, SearchError>;
}
