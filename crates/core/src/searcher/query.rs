//! Search query construction.

use once_cell::sync::Lazy;
use regex_lite::Regex;

static YEAR_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\((?:19\d{2}|200\d)\)").expect("valid regex"));

/// Strip `(19xx)` and `(200x)` markers and collapse whitespace.
pub fn clean_episode_title(title: &str) -> String {
    let stripped = YEAR_MARKER.replace_all(title, " ");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Placeholder titles from the library are not worth a search.
pub fn is_searchable_episode_title(title: &str) -> bool {
    let title = title.trim();
    !title.is_empty() && !title.eq_ignore_ascii_case("tba")
}

/// Queries tried for an episode, in order: series plus cleaned episode
/// title, then the episode title alone.
pub fn episode_queries(series: &str, episode: &str) -> Vec<String> {
    let with_series = format!("{} {}", series.trim(), clean_episode_title(episode));
    let episode_only = episode.trim().to_string();
    if with_series == episode_only {
        vec![with_series]
    } else {
        vec![with_series, episode_only]
    }
}

pub fn behind_the_scenes_query(title: &str) -> String {
    format!("{} - behind the scenes", title.trim())
}
