//! Search orchestration: run queries and hand the results to the selector.

use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

use super::query::{behind_the_scenes_query, episode_queries, is_searchable_episode_title};
use super::types::{SearchError, SearchQuery, Searcher};
use crate::candidate::{Candidate, TargetContext};
use crate::config::YtDlpConfig;
use crate::selector::Selector;

/// The selected video for an episode and the query that found it.
#[derive(Debug, Clone, Serialize)]
pub struct EpisodeMatch {
    pub candidate: Candidate,
    pub query: String,
}

/// Finds specials and behind-the-scenes extras through a [`Searcher`].
pub struct ExtrasFinder {
    searcher: Arc<dyn Searcher>,
    selector: Arc<Selector>,
    episode_results: usize,
    extras_results: usize,
}

impl std::fmt::Debug for ExtrasFinder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtrasFinder")
            .field("searcher", &self.searcher.name())
            .field("episode_results", &self.episode_results)
            .field("extras_results", &self.extras_results)
            .finish()
    }
}

impl ExtrasFinder {
    pub fn new(searcher: Arc<dyn Searcher>, selector: Arc<Selector>) -> Self {
        let defaults = YtDlpConfig::default();
        Self {
            searcher,
            selector,
            episode_results: defaults.episode_results,
            extras_results: defaults.extras_results,
        }
    }

    /// Override how many results each query requests.
    pub fn with_result_limits(mut self, episode_results: usize, extras_results: usize) -> Self {
        self.episode_results = episode_results;
        self.extras_results = extras_results;
        self
    }

    pub fn searcher_name(&self) -> &str {
        self.searcher.name()
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Search for the episode named in `context`.
    ///
    /// Tries the series plus episode title first, then the episode title
    /// alone. A failed attempt is logged and the next one still runs; the
    /// error of the last attempt is returned.
    pub async fn find_episode(
        &self,
        context: &TargetContext,
    ) -> Result<Option<EpisodeMatch>, SearchError> {
        let Some(episode) = context.secondary_title() else {
            warn!(title = %context.title(), "No episode title to search for");
            return Ok(None);
        };
        if !is_searchable_episode_title(episode) {
            info!(title = %context.title(), episode, "Skipping placeholder episode title");
            return Ok(None);
        }

        let queries = episode_queries(context.title(), episode);
        let attempts = queries.len();
        for (attempt, query) in queries.into_iter().enumerate() {
            let search = SearchQuery::new(query.clone(), self.episode_results);
            info!(searcher = self.searcher.name(), query = %query, attempt = attempt + 1, "Searching for episode");

            let result = match self.searcher.search(&search).await {
                Ok(result) => result,
                Err(e) if attempt + 1 < attempts => {
                    warn!(query = %query, error = %e, "Episode search failed, trying next query");
                    continue;
                }
                Err(e) => return Err(e),
            };

            if let Some(candidate) = self.selector.select_best(result.candidates, context, None) {
                return Ok(Some(EpisodeMatch { candidate, query }));
            }
        }

        info!(title = %context.title(), episode, "No acceptable match for episode");
        Ok(None)
    }

    /// Search for behind-the-scenes material about `context`'s title.
    pub async fn find_behind_the_scenes(
        &self,
        context: &TargetContext,
    ) -> Result<Vec<Candidate>, SearchError> {
        let query = behind_the_scenes_query(context.title());
        info!(searcher = self.searcher.name(), query = %query, "Searching for behind-the-scenes videos");

        let result = self
            .searcher
            .search(&SearchQuery::new(query, self.extras_results))
            .await?;
        Ok(self
            .selector
            .select_ranked(result.candidates, context, None, None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockSearcher;

    fn finder(searcher: Arc<MockSearcher>) -> ExtrasFinder {
        ExtrasFinder::new(searcher, Arc::new(Selector::new()))
    }

    #[tokio::test]
    async fn test_tba_episode_is_not_searched() {
        let searcher = Arc::new(MockSearcher::new());
        let context = TargetContext::new("Foundation").unwrap().with_episode("TBA");
        let found = finder(searcher.clone()).find_episode(&context).await.unwrap();
        assert!(found.is_none());
        assert_eq!(searcher.search_count().await, 0);
    }

    #[tokio::test]
    async fn test_missing_episode_title_is_not_searched() {
        let searcher = Arc::new(MockSearcher::new());
        let context = TargetContext::new("Foundation").unwrap();
        let found = finder(searcher.clone()).find_episode(&context).await.unwrap();
        assert!(found.is_none());
        assert_eq!(searcher.search_count().await, 0);
    }

    #[tokio::test]
    async fn test_result_limits_are_passed_through() {
        let searcher = Arc::new(MockSearcher::new());
        let context = TargetContext::new("Foundation").unwrap();
        finder(searcher.clone())
            .with_result_limits(3, 7)
            .find_behind_the_scenes(&context)
            .await
            .unwrap();
        let searches = searcher.recorded_searches().await;
        assert_eq!(searches[0].query, SearchQuery::new("Foundation - behind the scenes", 7));
    }
}
