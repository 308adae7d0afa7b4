//! Testing utilities and mock implementations.
//!
//! Provides a mock search backend and candidate fixtures so the finder and
//! the HTTP API can be tested without a yt-dlp binary or network access.
//!
//! # Example
//!
//! ```rust,ignore
//! use extrascout_core::testing::{fixtures, MockSearcher};
//!
//! let searcher = MockSearcher::new();
//! searcher.set_results(vec![fixtures::official_bts("Foundation", "Apple TV")]).await;
//!
//! // Use in an ExtrasFinder or AppState...
//! ```

mod mock_searcher;

pub use mock_searcher::{MockSearcher, RecordedSearch};

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::candidate::{Candidate, TargetContext};

    /// Create a candidate with only id and title set.
    ///
    /// Panics on a blank id; fixtures are for tests only.
    pub fn candidate(id: &str, title: &str) -> Candidate {
        Candidate::new(id, title).expect("fixture ids are not blank")
    }

    /// An official upload of a specific episode.
    pub fn episode_upload(series: &str, episode: &str, channel: &str) -> Candidate {
        candidate(
            &format!("ep-{}", episode.to_lowercase().replace(' ', "-")),
            &format!("{} - {} | Official", series, episode),
        )
        .with_channel(channel)
        .with_duration(1500)
        .with_views(120_000)
        .with_likes(6_000)
    }

    /// An official behind-the-scenes featurette.
    pub fn official_bts(series: &str, channel: &str) -> Candidate {
        candidate(
            &format!("bts-{}", series.to_lowercase().replace(' ', "-")),
            &format!("{} - Behind the Scenes", series),
        )
        .with_channel(channel)
        .with_duration(240)
    }

    /// A video game clip that merely shares words with a series.
    pub fn gameplay_clip(title: &str) -> Candidate {
        candidate("game", &format!("{} gameplay", title))
            .with_channel("RandomGamer")
            .with_duration(900)
            .with_views(2_000_000)
    }

    /// Context for a specific episode.
    pub fn episode_context(series: &str, episode: &str) -> TargetContext {
        TargetContext::new(series)
            .expect("fixture titles are not blank")
            .with_episode(episode)
    }

    /// Context for a behind-the-scenes search.
    pub fn extras_context(series: &str, network: &str, year: i32) -> TargetContext {
        TargetContext::new(series)
            .expect("fixture titles are not blank")
            .with_network(network)
            .with_year(year)
    }
}
