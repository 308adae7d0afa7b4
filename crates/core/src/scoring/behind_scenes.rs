//! Behind-the-scenes scoring.
//!
//! Used for open-ended extras searches where there is no episode title to
//! match, so the score leans on BTS phrasing, channel reputation and the
//! series title instead.

use tracing::debug;

use super::episode::content_before_series;
use super::keywords::KeywordLists;
use super::text::{
    brevity_factor, contains_any, network_affinity, word_ratio, CandidateText, PreparedTarget,
};
use super::weights::BehindScenesWeights;
use super::ScoreBreakdown;
use crate::candidate::Candidate;

pub fn bts_phrase(text: &CandidateText, weights: &BehindScenesWeights, keywords: &KeywordLists) -> f64 {
    if contains_any(&text.title_lower, &keywords.bts_phrases) {
        weights.bts_phrase
    } else {
        0.0
    }
}

/// VFX and technical breakdowns are BTS material even without the phrase.
pub fn breakdown_phrase(text: &CandidateText, weights: &BehindScenesWeights, keywords: &KeywordLists) -> f64 {
    if contains_any(&text.title_lower, &keywords.breakdown_phrases) {
        weights.breakdown
    } else {
        0.0
    }
}

/// Series in title, plus a bonus for cast or character focused BTS pieces.
pub fn series_in_title(
    text: &CandidateText,
    target: &PreparedTarget,
    weights: &BehindScenesWeights,
    keywords: &KeywordLists,
) -> (f64, f64) {
    if target.series.is_empty() || !text.title_lower.contains(target.series.as_str()) {
        return (0.0, 0.0);
    }
    let featured = contains_any(&text.title_lower, &keywords.featured_markers)
        && contains_any(&text.title_lower, &keywords.core_bts_phrases);
    let featured_bonus = if featured { weights.featured_bts } else { 0.0 };
    (weights.series_in_title, featured_bonus)
}

pub fn network_in_title(
    text: &CandidateText,
    target: &PreparedTarget,
    weights: &BehindScenesWeights,
) -> f64 {
    match &target.network {
        Some(network) if text.title_lower.contains(network.as_str()) => weights.network_in_title,
        _ => 0.0,
    }
}

/// How the uploading channel relates to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    /// The network's own channel.
    Network,
    /// An entertainment news channel known for BTS coverage.
    KnownSpecialist,
    /// An institution that merely shares the series name.
    Unrelated,
    Other,
}

pub fn classify_channel(
    text: &CandidateText,
    target: &PreparedTarget,
    keywords: &KeywordLists,
) -> ChannelKind {
    if let Some(network) = &target.network {
        if network_affinity(&text.channel_lower, network) {
            return ChannelKind::Network;
        }
    }
    if !text.channel_lower.is_empty() && contains_any(&text.channel_lower, &keywords.known_bts_channels)
    {
        return ChannelKind::KnownSpecialist;
    }
    let series_in_title =
        !target.series.is_empty() && text.title_lower.contains(target.series.as_str());
    if target.network.is_some()
        && series_in_title
        && contains_any(&text.channel_lower, &keywords.unrelated_channel_keywords)
    {
        return ChannelKind::Unrelated;
    }
    ChannelKind::Other
}

/// Signed channel contribution: bonus for the network or a known channel,
/// penalty for unrelated institutions.
pub fn channel_score(kind: ChannelKind, weights: &BehindScenesWeights) -> f64 {
    match kind {
        ChannelKind::Network => weights.network_match,
        ChannelKind::KnownSpecialist => weights.known_channel,
        ChannelKind::Unrelated => -weights.unrelated_channel_penalty,
        ChannelKind::Other => 0.0,
    }
}

pub fn educational_penalty(
    text: &CandidateText,
    weights: &BehindScenesWeights,
    keywords: &KeywordLists,
) -> f64 {
    let title = &text.title_lower;
    let phrase = contains_any(title, &keywords.educational_title_phrases);
    let combination = keywords
        .educational_title_combinations
        .iter()
        .any(|group| !group.is_empty() && group.iter().all(|p| title.contains(p.as_str())));
    if phrase || combination {
        weights.educational_penalty
    } else {
        0.0
    }
}

pub fn series_word_ratio(
    text: &CandidateText,
    target: &PreparedTarget,
    weights: &BehindScenesWeights,
) -> f64 {
    word_ratio(&text.title_lower, &target.series_words) * weights.word_ratio_max
}

pub fn official_verified(
    text: &CandidateText,
    weights: &BehindScenesWeights,
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

pub fn title_brevity(text: &CandidateText, weights: &BehindScenesWeights) -> f64 {
    weights.title_length_max * brevity_factor(text.title)
}

pub fn wrong_content_penalty(
    text: &CandidateText,
    weights: &BehindScenesWeights,
    keywords: &KeywordLists,
) -> f64 {
    if contains_any(&text.title_lower, &keywords.wrong_content_patterns) {
        weights.wrong_content_penalty
    } else {
        0.0
    }
}

/// Trailers only count as extras when they also advertise BTS material.
pub fn trailer_penalty(
    text: &CandidateText,
    weights: &BehindScenesWeights,
    keywords: &KeywordLists,
) -> f64 {
    if text.title_lower.contains("trailer")
        && !contains_any(&text.title_lower, &keywords.trailer_exempt_phrases)
    {
        weights.trailer_penalty
    } else {
        0.0
    }
}

/// Score a candidate as behind-the-scenes material for the target.
pub fn score_behind_scenes(
    candidate: &Candidate,
    target: &PreparedTarget,
    weights: &BehindScenesWeights,
    keywords: &KeywordLists,
) -> ScoreBreakdown {
    let text = CandidateText::new(candidate);
    let mut breakdown = ScoreBreakdown::default();

    breakdown.add("bts_phrase", bts_phrase(&text, weights, keywords));
    breakdown.add("breakdown", breakdown_phrase(&text, weights, keywords));
    let (series, featured) = series_in_title(&text, target, weights, keywords);
    breakdown.add("series_in_title", series);
    breakdown.add("featured_bts", featured);
    breakdown.add("network_in_title", network_in_title(&text, target, weights));
    let channel = classify_channel(&text, target, keywords);
    breakdown.add("channel", channel_score(channel, weights));
    breakdown.add("word_ratio", series_word_ratio(&text, target, weights));
    breakdown.add("official_verified", official_verified(&text, weights, keywords));
    breakdown.add("title_length", title_brevity(&text, weights));

    breakdown.subtract("educational", educational_penalty(&text, weights, keywords));
    breakdown.subtract(
        "content_before_series",
        content_before_series(&text, target, keywords, weights.content_before_series),
    );
    breakdown.subtract("wrong_content", wrong_content_penalty(&text, weights, keywords));
    breakdown.subtract("trailer", trailer_penalty(&text, weights, keywords));

    debug!(
        candidate = %candidate.title,
        channel = ?channel,
        score = breakdown.total(),
        rules = %breakdown,
        "Scored behind-the-scenes candidate"
    );

    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::TargetContext;

    fn target() -> PreparedTarget {
        PreparedTarget::new(
            &TargetContext::new("Foundation")
                .unwrap()
                .with_network("Apple TV+")
                .with_year(2021),
        )
    }

    fn score(candidate: &Candidate) -> f64 {
        score_behind_scenes(
            candidate,
            &target(),
            &BehindScenesWeights::default(),
            &KeywordLists::default(),
        )
        .total()
    }

    fn text_of(candidate: &Candidate) -> CandidateText<'_> {
        CandidateText::new(candidate)
    }

    #[test]
    fn test_bts_phrase_required_for_baseline() {
        let weights = BehindScenesWeights::default();
        let keywords = KeywordLists::default();
        let with = Candidate::new("a", "Foundation | Making Of").unwrap();
        let without = Candidate::new("b", "Foundation | Season Recap").unwrap();
        assert_eq!(bts_phrase(&text_of(&with), &weights, &keywords), 50.0);
        assert_eq!(bts_phrase(&text_of(&without), &weights, &keywords), 0.0);
    }

    #[test]
    fn test_featured_bts_bonus() {
        let weights = BehindScenesWeights::default();
        let keywords = KeywordLists::default();
        let c = Candidate::new("a", "Foundation — Demerzel: Behind the Scenes").unwrap();
        assert_eq!(
            series_in_title(&text_of(&c), &target(), &weights, &keywords),
            (40.0, 15.0)
        );

        let c = Candidate::new("a", "Foundation Featurette").unwrap();
        assert_eq!(
            series_in_title(&text_of(&c), &target(), &weights, &keywords),
            (40.0, 0.0)
        );
    }

    #[test]
    fn test_channel_classification() {
        let keywords = KeywordLists::default();
        let network = Candidate::new("a", "Foundation BTS").unwrap().with_channel("Apple TV");
        let specialist = Candidate::new("b", "Foundation BTS")
            .unwrap()
            .with_channel("Collider Extras");
        let unrelated = Candidate::new("c", "Foundation Year Showcase")
            .unwrap()
            .with_channel("Durham Sixth Form Centre");
        let other = Candidate::new("d", "Foundation BTS").unwrap().with_channel("Some Fan");

        assert_eq!(
            classify_channel(&text_of(&network), &target(), &keywords),
            ChannelKind::Network
        );
        // Known network, different channel: still a specialist
        assert_eq!(
            classify_channel(&text_of(&specialist), &target(), &keywords),
            ChannelKind::KnownSpecialist
        );
        assert_eq!(
            classify_channel(&text_of(&unrelated), &target(), &keywords),
            ChannelKind::Unrelated
        );
        assert_eq!(
            classify_channel(&text_of(&other), &target(), &keywords),
            ChannelKind::Other
        );
    }

    #[test]
    fn test_unrelated_channel_needs_known_network() {
        let keywords = KeywordLists::default();
        let no_network = PreparedTarget::new(&TargetContext::new("Foundation").unwrap());
        let c = Candidate::new("c", "Foundation Year Showcase")
            .unwrap()
            .with_channel("Durham University");
        assert_eq!(
            classify_channel(&text_of(&c), &no_network, &keywords),
            ChannelKind::Other
        );
    }

    #[test]
    fn test_educational_penalty() {
        let weights = BehindScenesWeights::default();
        let keywords = KeywordLists::default();
        let sixth_form = Candidate::new("a", "Foundation at our Sixth Form").unwrap();
        let durham = Candidate::new("b", "Durham Art Foundation course").unwrap();
        let durham_only = Candidate::new("c", "Durham foundation").unwrap();
        assert_eq!(educational_penalty(&text_of(&sixth_form), &weights, &keywords), 60.0);
        assert_eq!(educational_penalty(&text_of(&durham), &weights, &keywords), 60.0);
        assert_eq!(educational_penalty(&text_of(&durham_only), &weights, &keywords), 0.0);
    }

    #[test]
    fn test_trailer_penalty() {
        let weights = BehindScenesWeights::default();
        let keywords = KeywordLists::default();
        let trailer = Candidate::new("a", "Foundation Official Trailer").unwrap();
        let bts_trailer = Candidate::new("b", "Foundation Featurette Trailer").unwrap();
        assert_eq!(trailer_penalty(&text_of(&trailer), &weights, &keywords), 40.0);
        assert_eq!(trailer_penalty(&text_of(&bts_trailer), &weights, &keywords), 0.0);
    }

    #[test]
    fn test_official_bts_outscores_reaction() {
        let official = Candidate::new("a", "Foundation — Behind the Scenes | Apple TV+")
            .unwrap()
            .with_channel("Apple TV");
        let reaction = Candidate::new("b", "Foundation Behind the Scenes REACTION")
            .unwrap()
            .with_channel("Some Fan");
        assert!(score(&official) > score(&reaction));
        assert!(score(&official) >= 65.0);
    }

    #[test]
    fn test_foreign_title_penalized() {
        let own = Candidate::new("a", "Foundation Behind the Scenes").unwrap();
        let foreign = Candidate::new("b", "Wrong Turn The Foundation Behind the Scenes").unwrap();
        assert!(score(&own) - score(&foreign) >= 80.0);
    }
}
