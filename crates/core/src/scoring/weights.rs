//! Tunable weights for the scoring rules.
//!
//! Every field is a magnitude. Bonus rules add it, penalty rules subtract it,
//! so a negative value would flip the meaning of a rule. `validate` rejects
//! such values and `normalized` forces them back to magnitudes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised for unusable weight bundles.
#[derive(Debug, Error, PartialEq)]
pub enum ScoringError {
    #[error("Invalid weight {name}: {value} (weights must be finite and non-negative)")]
    InvalidWeight { name: &'static str, value: f64 },
}

/// Generates `fields()` and `normalized()` for a weights struct.
macro_rules! magnitudes {
    ($ty:ident { $($field:ident),* $(,)? }) => {
        impl $ty {
            /// Every float weight with its field name.
            pub fn fields(&self) -> Vec<(&'static str, f64)> {
                vec![$((stringify!($field), self.$field)),*]
            }

            /// Copy with every float weight forced to a finite magnitude.
            pub fn normalized(&self) -> Self {
                let mut out = self.clone();
                $(
                    out.$field = if out.$field.is_finite() { out.$field.abs() } else { 0.0 };
                )*
                out
            }

            /// Reject negative or non-finite weights.
            pub fn validate(&self) -> Result<(), ScoringError> {
                for (name, value) in self.fields() {
                    if !value.is_finite() || value < 0.0 {
                        return Err(ScoringError::InvalidWeight { name, value });
                    }
                }
                Ok(())
            }
        }
    };
}

/// Weights for scoring candidates against a specific episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub exact_match: f64,
    pub episode_in_title: f64,
    pub network_match: f64,
    pub word_ratio_max: f64,
    pub series_in_title: f64,
    pub title_length_max: f64,
    pub upload_date_proximity_max: f64,
    pub official_verified: f64,
    pub description_match_max: f64,
    pub description_series: f64,
    pub description_episode: f64,
    pub description_official: f64,
    pub view_count_max: f64,
    pub like_ratio_max: f64,

    pub video_game_penalty: f64,
    pub uploaded_before_series: f64,
    pub uploaded_before_series_per_year: f64,
    pub old_year_penalty: f64,
    pub content_before_series: f64,
    pub duration_invalid: f64,
    pub compilation_penalty: f64,

    pub min_duration_secs: u64,
    /// 90 minutes.
    pub max_duration_secs: u64,
    pub min_view_count_for_like_ratio: u64,
    /// Upload years further than this from the reference year earn nothing.
    pub upload_year_window: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            exact_match: 100.0,
            episode_in_title: 50.0,
            network_match: 40.0,
            word_ratio_max: 40.0,
            series_in_title: 30.0,
            title_length_max: 20.0,
            upload_date_proximity_max: 20.0,
            official_verified: 15.0,
            description_match_max: 15.0,
            description_series: 8.0,
            description_episode: 7.0,
            description_official: 5.0,
            view_count_max: 10.0,
            like_ratio_max: 8.0,

            video_game_penalty: 150.0,
            uploaded_before_series: 120.0,
            uploaded_before_series_per_year: 20.0,
            old_year_penalty: 100.0,
            content_before_series: 80.0,
            duration_invalid: 50.0,
            compilation_penalty: 30.0,

            min_duration_secs: 60,
            max_duration_secs: 5400,
            min_view_count_for_like_ratio: 100,
            upload_year_window: 5,
        }
    }
}

magnitudes!(ScoringWeights {
    exact_match,
    episode_in_title,
    network_match,
    word_ratio_max,
    series_in_title,
    title_length_max,
    upload_date_proximity_max,
    official_verified,
    description_match_max,
    description_series,
    description_episode,
    description_official,
    view_count_max,
    like_ratio_max,
    video_game_penalty,
    uploaded_before_series,
    uploaded_before_series_per_year,
    old_year_penalty,
    content_before_series,
    duration_invalid,
    compilation_penalty,
});

/// Weights for scoring open-ended behind-the-scenes results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehindScenesWeights {
    pub bts_phrase: f64,
    pub breakdown: f64,
    pub series_in_title: f64,
    /// Character or cast focused BTS pieces ("Demerzel: Behind the Scenes").
    pub featured_bts: f64,
    pub network_in_title: f64,
    pub network_match: f64,
    pub known_channel: f64,
    pub word_ratio_max: f64,
    pub official_verified: f64,
    pub title_length_max: f64,

    pub unrelated_channel_penalty: f64,
    pub educational_penalty: f64,
    pub content_before_series: f64,
    pub wrong_content_penalty: f64,
    pub trailer_penalty: f64,
}

impl Default for BehindScenesWeights {
    fn default() -> Self {
        Self {
            bts_phrase: 50.0,
            breakdown: 40.0,
            series_in_title: 40.0,
            featured_bts: 15.0,
            network_in_title: 50.0,
            network_match: 50.0,
            known_channel: 40.0,
            word_ratio_max: 30.0,
            official_verified: 20.0,
            title_length_max: 15.0,

            unrelated_channel_penalty: 50.0,
            educational_penalty: 60.0,
            content_before_series: 80.0,
            wrong_content_penalty: 30.0,
            trailer_penalty: 40.0,
        }
    }
}

magnitudes!(BehindScenesWeights {
    bts_phrase,
    breakdown,
    series_in_title,
    featured_bts,
    network_in_title,
    network_match,
    known_channel,
    word_ratio_max,
    official_verified,
    title_length_max,
    unrelated_channel_penalty,
    educational_penalty,
    content_before_series,
    wrong_content_penalty,
    trailer_penalty,
});
