//! Episode match scoring.
//!
//! Each rule is a standalone function returning its contribution in points
//! (penalties return the magnitude to subtract). `score_episode` runs them all
//! and records the non-zero results in a [`ScoreBreakdown`].

use tracing::debug;

use super::keywords::KeywordLists;
use super::text::{
    brevity_factor, capitalized_words_before_series, contains_any, has_old_year_marker,
    network_affinity, word_ratio, CandidateText, PreparedTarget,
};
use super::weights::ScoringWeights;
use super::ScoreBreakdown;
use crate::candidate::Candidate;

/// Like ratio tiers as (minimum ratio, share of `like_ratio_max`).
const LIKE_RATIO_TIERS: [(f64, f64); 3] = [(0.05, 1.0), (0.03, 0.625), (0.02, 0.375)];

/// Title equals the episode title, or `"{series} {episode}"`.
pub fn exact_match(text: &CandidateText, target: &PreparedTarget, weights: &ScoringWeights) -> f64 {
    let Some(episode) = &target.episode else {
        return 0.0;
    };
    let title = text.title_lower.trim();
    if title == episode || title == format!("{} {}", target.series, episode) {
        weights.exact_match
    } else {
        0.0
    }
}

pub fn episode_in_title(
    text: &CandidateText,
    target: &PreparedTarget,
    weights: &ScoringWeights,
) -> f64 {
    match &target.episode {
        Some(episode) if text.title_lower.contains(episode.as_str()) => weights.episode_in_title,
        _ => 0.0,
    }
}

pub fn series_in_title(
    text: &CandidateText,
    target: &PreparedTarget,
    weights: &ScoringWeights,
) -> f64 {
    if !target.series.is_empty() && text.title_lower.contains(target.series.as_str()) {
        weights.series_in_title
    } else {
        0.0
    }
}

pub fn search_word_ratio(
    text: &CandidateText,
    target: &PreparedTarget,
    weights: &ScoringWeights,
) -> f64 {
    word_ratio(&text.title_lower, &target.search_words) * weights.word_ratio_max
}

/// Shorter titles are less likely to be compilations.
pub fn title_brevity(text: &CandidateText, weights: &ScoringWeights) -> f64 {
    weights.title_length_max * brevity_factor(text.title)
}

pub fn official_verified(
    text: &CandidateText,
    weights: &ScoringWeights,
    keywords: &KeywordLists,
) -> f64 {
    if contains_any(&text.title_lower, &keywords.official_markers)
        || contains_any(&text.channel_lower, &keywords.official_markers)
    {
        weights.official_verified
    } else {
        0.0
    }
}

pub fn network_match(text: &CandidateText, target: &PreparedTarget, weights: &ScoringWeights) -> f64 {
    match &target.network {
        Some(network) if network_affinity(&text.channel_lower, network) => weights.network_match,
        _ => 0.0,
    }
}

/// Logarithmic bonus: nothing up to 1,000 views, the full bonus from 100,000.
pub fn view_count(view_count: Option<u64>, weights: &ScoringWeights) -> f64 {
    match view_count {
        Some(views) if views > 0 => {
            (((views as f64).log10() - 3.0) * 2.0).max(0.0).min(weights.view_count_max)
        }
        _ => 0.0,
    }
}

pub fn like_ratio(view_count: Option<u64>, like_count: Option<u64>, weights: &ScoringWeights) -> f64 {
    let (Some(views), Some(likes)) = (view_count, like_count) else {
        return 0.0;
    };
    if likes == 0 || views <= weights.min_view_count_for_like_ratio {
        return 0.0;
    }

    let ratio = likes as f64 / views as f64;
    LIKE_RATIO_TIERS
        .iter()
        .find(|(min_ratio, _)| ratio >= *min_ratio)
        .map(|(_, share)| weights.like_ratio_max * share)
        .unwrap_or(0.0)
}

pub fn description_match(
    text: &CandidateText,
    target: &PreparedTarget,
    weights: &ScoringWeights,
    keywords: &KeywordLists,
) -> f64 {
    let description = &text.description_lower;
    if description.is_empty() {
        return 0.0;
    }

    let mut bonus = 0.0;
    if !target.series.is_empty() && description.contains(target.series.as_str()) {
        bonus += weights.description_series;
    }
    if let Some(episode) = &target.episode {
        if description.contains(episode.as_str()) {
            bonus += weights.description_episode;
        }
    }
    let network_in_description = target
        .network
        .as_deref()
        .is_some_and(|network| description.contains(network));
    if network_in_description || contains_any(description, &keywords.description_official_markers) {
        bonus += weights.description_official;
    }

    bonus.min(weights.description_match_max)
}

pub fn upload_date_proximity(
    upload_year: Option<i32>,
    target: &PreparedTarget,
    weights: &ScoringWeights,
) -> f64 {
    let (Some(upload), Some(reference)) = (upload_year, target.reference_year) else {
        return 0.0;
    };
    let window = weights.upload_year_window;
    if window == 0 {
        return 0.0;
    }
    let diff = (i64::from(upload) - i64::from(reference)).unsigned_abs();
    if diff <= u64::from(window) {
        weights.upload_date_proximity_max * (1.0 - diff as f64 / window as f64)
    } else {
        0.0
    }
}

/// Penalty for clips too short to be an episode or long enough to be a marathon.
pub fn duration_penalty(duration_secs: Option<u64>, weights: &ScoringWeights) -> f64 {
    match duration_secs {
        Some(d) if d > 0 && (d < weights.min_duration_secs || d > weights.max_duration_secs) => {
            weights.duration_invalid
        }
        _ => 0.0,
    }
}

pub fn compilation_penalty(
    text: &CandidateText,
    weights: &ScoringWeights,
    keywords: &KeywordLists,
) -> f64 {
    if contains_any(&text.title_lower, &keywords.compilation_markers) {
        weights.compilation_penalty
    } else {
        0.0
    }
}

pub fn video_game_penalty(
    text: &CandidateText,
    weights: &ScoringWeights,
    keywords: &KeywordLists,
) -> f64 {
    if contains_any(&text.title_lower, &keywords.video_game_indicators) {
        weights.video_game_penalty
    } else {
        0.0
    }
}

pub fn old_year_penalty(text: &CandidateText, weights: &ScoringWeights) -> f64 {
    if has_old_year_marker(text.title) {
        weights.old_year_penalty
    } else {
        0.0
    }
}

/// Penalty for uploads more than a year older than the series itself,
/// growing with the gap up to `uploaded_before_series`.
pub fn uploaded_before_series(
    upload_year: Option<i32>,
    target: &PreparedTarget,
    weights: &ScoringWeights,
) -> f64 {
    let (Some(upload), Some(reference)) = (upload_year, target.reference_year) else {
        return 0.0;
    };
    let years_before = i64::from(reference) - i64::from(upload);
    if years_before <= 1 {
        return 0.0;
    }
    let years_before = years_before as f64;
    (years_before * weights.uploaded_before_series_per_year).min(weights.uploaded_before_series)
}

/// Two or more capitalized words before the series name usually mean the
/// video belongs to a different title ("Wrong Turn The Foundation").
pub fn content_before_series(
    text: &CandidateText,
    target: &PreparedTarget,
    keywords: &KeywordLists,
    penalty: f64,
) -> f64 {
    let capitalized = capitalized_words_before_series(
        text.title,
        &text.title_lower,
        &target.series,
        &keywords.stop_words,
    );
    if capitalized >= 2 {
        penalty
    } else {
        0.0
    }
}

/// Score a candidate against a specific episode.
pub fn score_episode(
    candidate: &Candidate,
    target: &PreparedTarget,
    weights: &ScoringWeights,
    keywords: &KeywordLists,
) -> ScoreBreakdown {
    let text = CandidateText::new(candidate);
    let upload_year = candidate.upload_year();
    let mut breakdown = ScoreBreakdown::default();

    breakdown.add("exact_match", exact_match(&text, target, weights));
    breakdown.add("episode_in_title", episode_in_title(&text, target, weights));
    breakdown.add("series_in_title", series_in_title(&text, target, weights));
    breakdown.add("word_ratio", search_word_ratio(&text, target, weights));
    breakdown.add("title_length", title_brevity(&text, weights));
    breakdown.add("official_verified", official_verified(&text, weights, keywords));
    breakdown.add("network_match", network_match(&text, target, weights));
    breakdown.add("view_count", view_count(candidate.view_count, weights));
    breakdown.add(
        "like_ratio",
        like_ratio(candidate.view_count, candidate.like_count, weights),
    );
    breakdown.add(
        "description_match",
        description_match(&text, target, weights, keywords),
    );
    breakdown.add(
        "upload_date_proximity",
        upload_date_proximity(upload_year, target, weights),
    );

    breakdown.subtract("duration_invalid", duration_penalty(candidate.duration_secs, weights));
    breakdown.subtract("compilation", compilation_penalty(&text, weights, keywords));
    breakdown.subtract("video_game", video_game_penalty(&text, weights, keywords));
    breakdown.subtract("old_year", old_year_penalty(&text, weights));
    breakdown.subtract(
        "uploaded_before_series",
        uploaded_before_series(upload_year, target, weights),
    );
    breakdown.subtract(
        "content_before_series",
        content_before_series(&text, target, keywords, weights.content_before_series),
    );

    debug!(
        candidate = %candidate.title,
        score = breakdown.total(),
        rules = %breakdown,
        "Scored episode candidate"
    );

    breakdown
}
