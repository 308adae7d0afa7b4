//! Video search abstraction.
//!
//! This module provides a `Searcher` trait for video search backends
//! (currently yt-dlp) and the `ExtrasFinder` that turns search results into
//! selected specials and extras.

mod finder;
mod query;
mod types;
mod ytdlp;

pub use finder::{EpisodeMatch, ExtrasFinder};
pub use query::{
    behind_the_scenes_query, clean_episode_title, episode_queries, is_searchable_episode_title,
};
pub use types::*;
pub use ytdlp::{parse_search_output, YtDlpSearcher};
