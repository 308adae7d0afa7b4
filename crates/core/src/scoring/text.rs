//! Text normalization helpers shared by the scoring rules.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use std::collections::HashSet;

use crate::candidate::{Candidate, TargetContext};

static OLD_YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(19\d{2}\)").expect("valid regex"));

/// Punctuation trimmed from words before they are compared.
const WORD_PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', '-', '—', '–', '|', ':', ';', '(', ')', '[', ']', '"', '\'',
];

/// Lower-cased views of the target, computed once per selection.
#[derive(Debug, Clone)]
pub struct PreparedTarget {
    pub series: String,
    pub episode: Option<String>,
    /// Words of `"{series} {episode}"`.
    pub search_words: HashSet<String>,
    /// Words of the series title alone.
    pub series_words: HashSet<String>,
    pub network: Option<String>,
    pub reference_year: Option<i32>,
}

impl PreparedTarget {
    pub fn new(context: &TargetContext) -> Self {
        let series = context.title().trim().to_lowercase();
        let episode = context
            .secondary_title()
            .map(|e| e.trim().to_lowercase())
            .filter(|e| !e.is_empty());
        let search_words = match &episode {
            Some(episode) => word_set(&format!("{} {}", series, episode)),
            None => word_set(&series),
        };
        Self {
            series_words: word_set(&series),
            series,
            episode,
            search_words,
            network: context
                .network()
                .map(|n| n.trim().to_lowercase())
                .filter(|n| !n.is_empty()),
            reference_year: context.reference_year(),
        }
    }
}

/// Lower-cased views of a candidate, computed once per candidate.
#[derive(Debug, Clone)]
pub struct CandidateText<'a> {
    /// Original title, needed for capitalization checks.
    pub title: &'a str,
    pub title_lower: String,
    pub channel_lower: String,
    pub description_lower: String,
}

impl<'a> CandidateText<'a> {
    pub fn new(candidate: &'a Candidate) -> Self {
        Self {
            title: &candidate.title,
            title_lower: candidate.title.to_lowercase(),
            channel_lower: candidate.channel.trim().to_lowercase(),
            description_lower: candidate.description.to_lowercase(),
        }
    }
}

/// Whitespace separated words of an already lower-cased text.
pub fn word_set(text: &str) -> HashSet<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Whether any of `needles` is a substring of `haystack`.
pub fn contains_any(haystack: &str, needles: &[String]) -> bool {
    needles.iter().any(|n| haystack.contains(n.as_str()))
}

/// Share of the brevity bonus earned by a title: 1 for an empty title,
/// falling linearly to 0 at 100 characters.
pub fn brevity_factor(title: &str) -> f64 {
    let length = title.chars().count();
    if length < 100 {
        1.0 - length as f64 / 100.0
    } else {
        0.0
    }
}

/// Channel matches the network by containment in either direction, or the
/// network is a short abbreviation equal to one of the channel's words.
pub fn network_affinity(channel_lower: &str, network_lower: &str) -> bool {
    if channel_lower.is_empty() || network_lower.is_empty() {
        return false;
    }
    if channel_lower.contains(network_lower) || network_lower.contains(channel_lower) {
        return true;
    }
    network_lower.chars().count() <= 5 && channel_lower.split_whitespace().any(|w| w == network_lower)
}

/// Fraction of `reference` words that also appear in `title_lower`.
pub fn word_ratio(title_lower: &str, reference: &HashSet<String>) -> f64 {
    if reference.is_empty() {
        return 0.0;
    }
    let title_words = word_set(title_lower);
    let common = reference.intersection(&title_words).count();
    common as f64 / reference.len() as f64
}

/// Whether the title carries a `(19xx)` year marker.
pub fn has_old_year_marker(title: &str) -> bool {
    OLD_YEAR.is_match(title)
}

/// Number of capitalized words before the first occurrence of `series_lower`
/// in the title, ignoring stop words and punctuation-only tokens.
///
/// Returns 0 when the series is absent or starts the title.
pub fn capitalized_words_before_series(
    title: &str,
    title_lower: &str,
    series_lower: &str,
    stop_words: &[String],
) -> usize {
    if series_lower.is_empty() {
        return 0;
    }
    if !title_lower.contains(series_lower) {
        return 0;
    }
    // Lower-casing can change lengths, so locate the series in the original title.
    let Some(position) = title
        .char_indices()
        .map(|(i, _)| i)
        .find(|&i| title[i..].to_lowercase().starts_with(series_lower))
    else {
        return 0;
    };
    if position == 0 {
        return 0;
    }
    let before = &title[..position];

    before
        .split_whitespace()
        .map(|word| word.trim_matches(WORD_PUNCTUATION))
        .filter(|word| !word.is_empty())
        .filter(|word| !stop_words.iter().any(|s| s == &word.to_lowercase()))
        .filter(|word| word.chars().next().is_some_and(char::is_uppercase))
        .count()
}

/// Title words used for duplicate detection: lower-cased, trimmed of
/// punctuation, without stop words and words of two characters or fewer.
pub fn dedup_words(title: &str, stop_words: &[String]) -> HashSet<String> {
    title
        .to_lowercase()
        .split_whitespace()
        .filter(|word| word.chars().count() > 2)
        .filter(|word| !stop_words.iter().any(|s| s == word))
        .map(|word| word.trim_matches(WORD_PUNCTUATION).to_string())
        .filter(|word| !word.is_empty())
        .collect()
}
