//! Keyword lists used by the scoring rules.
//!
//! These are the parts of the scorer most likely to need tuning, so they are
//! plain data that can be overridden from configuration.

use serde::{Deserialize, Serialize};

/// All keyword lists consulted while scoring. Matching is done against
/// lower-cased text, so entries must be lower case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordLists {
    /// Words ignored when looking for capitalized words before the series name.
    pub stop_words: Vec<String>,
    /// Markers of official uploads, checked in title and channel.
    pub official_markers: Vec<String>,
    /// Markers of compilations and playlists.
    pub compilation_markers: Vec<String>,
    /// Markers of video game footage, matched as substrings of the title.
    pub video_game_indicators: Vec<String>,
    /// Markers of official content in descriptions (the network is added at runtime).
    pub description_official_markers: Vec<String>,
    pub bts_phrases: Vec<String>,
    /// Subset of BTS phrases required for the featured-BTS bonus.
    pub core_bts_phrases: Vec<String>,
    pub breakdown_phrases: Vec<String>,
    /// Markers of cast or character focused pieces.
    pub featured_markers: Vec<String>,
    /// Entertainment news channels that regularly publish BTS material.
    pub known_bts_channels: Vec<String>,
    /// Channel keywords of institutions sharing a name with a series.
    pub unrelated_channel_keywords: Vec<String>,
    pub educational_title_phrases: Vec<String>,
    /// Phrase groups that only count when every phrase of the group is present.
    pub educational_title_combinations: Vec<Vec<String>>,
    /// Reactions, reviews and other content that is about a show but not from it.
    pub wrong_content_patterns: Vec<String>,
    /// Phrases that exempt a trailer from the trailer penalty.
    pub trailer_exempt_phrases: Vec<String>,
    /// Words dropped before comparing titles for duplicates.
    pub dedup_stop_words: Vec<String>,
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl Default for KeywordLists {
    fn default() -> Self {
        Self {
            stop_words: owned(&[
                "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with",
                "by", "from", "as", "is", "vs", "ft", "feat",
            ]),
            official_markers: owned(&["official", "vevo", "verified"]),
            compilation_markers: owned(&["compilation", "playlist", "all episodes", "full series"]),
            video_game_indicators: owned(&[
                "juno new origins",
                "juno",
                "kerbal space program",
                "ksp",
                "gameplay",
                "game play",
                "let's play",
                "walkthrough",
                "gaming",
                "simulator",
                "sim",
                "mod",
                "modded",
                "pc game",
                "video game",
            ]),
            description_official_markers: owned(&["official", "©", "all rights reserved"]),
            bts_phrases: owned(&[
                "behind the scenes",
                "behind the scene",
                "bts",
                "making of",
                "making-of",
                "backstage",
                "featurette",
            ]),
            core_bts_phrases: owned(&["behind the scenes", "behind the scene", "bts"]),
            breakdown_phrases: owned(&["vfx breakdown", "breakdown", "visual effects"]),
            featured_markers: owned(&[":", "with", "interview", "character"]),
            known_bts_channels: owned(&[
                "filmisnow",
                "rotten tomatoes",
                "ign",
                "entertainment weekly",
                "collider",
                "comicbook.com",
                "screen rant",
                "variety",
                "the hollywood reporter",
                "deadline",
                "den of geek",
                "syfy",
                "nerdist",
                "movie trailers source",
                "joblo",
            ]),
            unrelated_channel_keywords: owned(&[
                "school",
                "university",
                "college",
                "fashion brand",
                "prada",
                "museum",
                "art gallery",
                "foundation (charity)",
                "sixth form",
                "centre",
            ]),
            educational_title_phrases: owned(&["sixth form"]),
            educational_title_combinations: vec![owned(&["durham", "art foundation"])],
            wrong_content_patterns: owned(&[
                "compilation",
                "playlist",
                "all episodes",
                "full series",
                "reaction",
                "review",
                "unboxing",
                "gameplay",
                "walkthrough",
                "interview only",
                "cast interview",
                "ending explained",
                "theories",
            ]),
            trailer_exempt_phrases: owned(&[
                "behind the scenes",
                "behind the scene",
                "bts",
                "making of",
                "featurette",
            ]),
            dedup_stop_words: owned(&["the", "and", "for", "with", "from"]),
        }
    }
}

impl KeywordLists {
    /// Copy with every entry lower-cased and blank entries removed.
    pub fn normalized(&self) -> Self {
        fn clean(list: &[String]) -> Vec<String> {
            list.iter()
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect()
        }

        Self {
            stop_words: clean(&self.stop_words),
            official_markers: clean(&self.official_markers),
            compilation_markers: clean(&self.compilation_markers),
            video_game_indicators: clean(&self.video_game_indicators),
            description_official_markers: clean(&self.description_official_markers),
            bts_phrases: clean(&self.bts_phrases),
            core_bts_phrases: clean(&self.core_bts_phrases),
            breakdown_phrases: clean(&self.breakdown_phrases),
            featured_markers: clean(&self.featured_markers),
            known_bts_channels: clean(&self.known_bts_channels),
            unrelated_channel_keywords: clean(&self.unrelated_channel_keywords),
            educational_title_phrases: clean(&self.educational_title_phrases),
            educational_title_combinations: self
                .educational_title_combinations
                .iter()
                .map(|group| clean(group))
                .filter(|group| !group.is_empty())
                .collect(),
            wrong_content_patterns: clean(&self.wrong_content_patterns),
            trailer_exempt_phrases: clean(&self.trailer_exempt_phrases),
            dedup_stop_words: clean(&self.dedup_stop_words),
        }
    }
}
