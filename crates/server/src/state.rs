use std::sync::Arc;
use extrascout_core::{Config, ExtrasFinder, Searcher, Selector};

/// Shared application state
pub struct AppState {
    config: Config,
    selector: Arc<Selector>,
    finder: Option<ExtrasFinder>,
}

impl AppState {
    pub fn new(config: Config, searcher: Option<Arc<dyn Searcher>>) -> Self {
        let selector = Arc::new(Selector::with_config(config.selection.clone()));
        let finder = searcher.map(|searcher| {
            let finder = ExtrasFinder::new(searcher, Arc::clone(&selector));
            match &config.searcher {
                Some(searcher_config) => finder.with_result_limits(
                    searcher_config.yt_dlp.episode_results,
                    searcher_config.yt_dlp.extras_results,
                ),
                None => finder,
            }
        });

        Self {
            config,
            selector,
            finder,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Finder, if a search backend is configured.
    pub fn finder(&self) -> Option<&ExtrasFinder> {
        self.finder.as_ref()
    }
}
