//! Mock searcher for testing.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;

use crate::candidate::Candidate;
use crate::searcher::{SearchError, SearchQuery, SearchResult, Searcher};

/// A recorded search for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedSearch {
    /// The query that was searched.
    pub query: SearchQuery,
    /// When the search was made.
    pub timestamp: Instant,
}

/// A query handler that produces results dynamically based on the query.
type QueryHandler = Box<dyn Fn(&str) -> Option<Vec<Candidate>> + Send + Sync>;

/// Mock implementation of the Searcher trait.
///
/// Provides controllable behavior for testing:
/// - Return configurable search results
/// - Track search queries for assertions
/// - Simulate failures
///
/// # Example
///
/// ```rust,ignore
/// use extrascout_core::testing::{MockSearcher, fixtures};
///
/// let searcher = MockSearcher::new();
/// searcher.set_results(vec![
///     fixtures::candidate("a1", "Foundation - Behind the Scenes"),
/// ]).await;
///
/// let result = searcher.search(&SearchQuery::new("foundation", 10)).await?;
/// assert_eq!(result.candidates.len(), 1);
/// assert_eq!(searcher.search_count().await, 1);
/// ```
pub struct MockSearcher {
    /// Configured results to return.
    results: Arc<RwLock<Vec<Candidate>>>,
    /// Recorded search queries.
    searches: Arc<RwLock<Vec<RecordedSearch>>>,
    /// Errors returned by the next searches, in order.
    errors: Arc<RwLock<VecDeque<SearchError>>>,
    /// Query handler for dynamic result generation based on query string.
    query_handler: Arc<RwLock<Option<QueryHandler>>>,
}

impl std::fmt::Debug for MockSearcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockSearcher")
            .field("results", &"<results>")
            .field("searches", &"<searches>")
            .field("errors", &"<errors>")
            .field("query_handler", &"<handler>")
            .finish()
    }
}

impl Default for MockSearcher {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSearcher {
    /// Create a new mock searcher with empty results.
    pub fn new() -> Self {
        Self {
            results: Arc::new(RwLock::new(Vec::new())),
            searches: Arc::new(RwLock::new(Vec::new())),
            errors: Arc::new(RwLock::new(VecDeque::new())),
            query_handler: Arc::new(RwLock::new(None)),
        }
    }

    /// Create a mock searcher with predefined results.
    pub fn with_results(results: Vec<Candidate>) -> Self {
        Self {
            results: Arc::new(RwLock::new(results)),
            ..Self::new()
        }
    }

    /// Set the results to return for subsequent searches.
    pub async fn set_results(&self, results: Vec<Candidate>) {
        *self.results.write().await = results;
    }

    /// Get recorded search queries.
    pub async fn recorded_searches(&self) -> Vec<RecordedSearch> {
        self.searches.read().await.clone()
    }

    /// Get the number of searches performed.
    pub async fn search_count(&self) -> usize {
        self.searches.read().await.len()
    }

    /// Configure the next search to fail with the given error.
    ///
    /// Calling this repeatedly queues several failures.
    pub async fn set_next_error(&self, error: SearchError) {
        self.errors.write().await.push_back(error);
    }

    /// Set a query handler that dynamically generates results based on the query string.
    ///
    /// The handler returns `Some(results)` to override the configured results,
    /// or `None` to fall back to them. Useful for testing query fallbacks.
    pub async fn set_query_handler<F>(&self, handler: F)
    where
        F: Fn(&str) -> Option<Vec<Candidate>> + Send + Sync + 'static,
    {
        *self.query_handler.write().await = Some(Box::new(handler));
    }
}

#[async_trait]
impl Searcher for MockSearcher {
    fn name(&self) -> &str {
        "mock"
    }

    async fn search(&self, query: &SearchQuery) -> Result<SearchResult, SearchError> {
        // Record the search
        self.searches.write().await.push(RecordedSearch {
            query: query.clone(),
            timestamp: Instant::now(),
        });

        // Check for injected error
        if let Some(err) = self.errors.write().await.pop_front() {
            return Err(err);
        }

        let handled = {
            let handler = self.query_handler.read().await;
            handler.as_ref().and_then(|h| h(&query.query))
        };
        let candidates = match handled {
            Some(results) => results,
            None => self.results.read().await.clone(),
        };

        Ok(SearchResult {
            query: query.clone(),
            candidates: candidates.into_iter().take(query.limit).collect(),
            skipped: 0,
            duration_ms: 50, // Simulated fast search
            searched_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;

    #[tokio::test]
    async fn test_basic_search() {
        let searcher = MockSearcher::new();
        searcher
            .set_results(vec![
                fixtures::candidate("a", "Foundation - Behind the Scenes"),
                fixtures::candidate("b", "Foundation VFX Breakdown"),
            ])
            .await;

        let result = searcher
            .search(&SearchQuery::new("foundation", 10))
            .await
            .unwrap();
        assert_eq!(result.candidates.len(), 2);
    }

    #[tokio::test]
    async fn test_recorded_searches() {
        let searcher = MockSearcher::new();
        searcher.search(&SearchQuery::new("first", 5)).await.unwrap();
        searcher.search(&SearchQuery::new("second", 5)).await.unwrap();

        let searches = searcher.recorded_searches().await;
        assert_eq!(searches.len(), 2);
        assert_eq!(searches[0].query.query, "first");
        assert_eq!(searches[1].query.query, "second");
    }

    #[tokio::test]
    async fn test_error_injection() {
        let searcher = MockSearcher::new();
        searcher
            .set_next_error(SearchError::CommandFailed("test error".into()))
            .await;

        let result = searcher.search(&SearchQuery::new("test", 5)).await;
        assert!(result.is_err());

        // Error should be consumed
        let result = searcher.search(&SearchQuery::new("test", 5)).await;
        assert!(result.is_ok());
        assert_eq!(searcher.search_count().await, 2);
    }

    #[tokio::test]
    async fn test_limit() {
        let searcher = MockSearcher::with_results(vec![
            fixtures::candidate("1", "One"),
            fixtures::candidate("2", "Two"),
            fixtures::candidate("3", "Three"),
        ]);

        let result = searcher.search(&SearchQuery::new("", 2)).await.unwrap();
        assert_eq!(result.candidates.len(), 2);
    }

    #[tokio::test]
    async fn test_query_handler() {
        let searcher = MockSearcher::with_results(vec![fixtures::candidate("default", "Default")]);
        searcher
            .set_query_handler(|query| {
                if query.contains("special") {
                    Some(vec![fixtures::candidate("special", "Special")])
                } else {
                    None
                }
            })
            .await;

        let result = searcher.search(&SearchQuery::new("special", 5)).await.unwrap();
        assert_eq!(result.candidates[0].id, "special");

        let result = searcher.search(&SearchQuery::new("other", 5)).await.unwrap();
        assert_eq!(result.candidates[0].id, "default");
    }
}
