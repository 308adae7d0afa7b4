//! Candidate selection.
//!
//! Wraps the scoring rules with the two selection modes: a single best
//! match for a specific episode, and a ranked, deduplicated list of
//! behind-the-scenes extras.

mod dedup;

pub use dedup::{
    durations_close, is_near_duplicate, remove_near_duplicates, title_similarity, DedupConfig,
};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::candidate::{Candidate, TargetContext};
use crate::scoring::{
    score_behind_scenes, score_episode, BehindScenesWeights, KeywordLists, PreparedTarget,
    ScoreBreakdown, ScoringWeights,
};

/// Thresholds, weights and keyword lists used by a [`Selector`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Minimum score for an episode match to be accepted.
    pub episode_min_score: f64,
    /// Minimum score for a behind-the-scenes result to be kept.
    pub extras_min_score: f64,
    /// Maximum number of behind-the-scenes results returned.
    pub max_results: usize,
    pub weights: ScoringWeights,
    pub behind_scenes_weights: BehindScenesWeights,
    pub dedup: DedupConfig,
    pub keywords: KeywordLists,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            episode_min_score: 50.0,
            extras_min_score: 65.0,
            max_results: 20,
            weights: ScoringWeights::default(),
            behind_scenes_weights: BehindScenesWeights::default(),
            dedup: DedupConfig::default(),
            keywords: KeywordLists::default(),
        }
    }
}

/// Scores and selects candidates. Immutable once built.
#[derive(Debug, Clone)]
pub struct Selector {
    config: SelectorConfig,
}

impl Default for Selector {
    fn default() -> Self {
        Self::new()
    }
}

impl Selector {
    /// Create a selector with default weights and thresholds.
    pub fn new() -> Self {
        Self::with_config(SelectorConfig::default())
    }

    /// Create a selector with custom config.
    ///
    /// Weights are forced to finite magnitudes so penalties always subtract.
    pub fn with_config(mut config: SelectorConfig) -> Self {
        if let Err(e) = config.weights.validate() {
            warn!("Normalizing episode weights: {}", e);
            config.weights = config.weights.normalized();
        }
        if let Err(e) = config.behind_scenes_weights.validate() {
            warn!("Normalizing behind-the-scenes weights: {}", e);
            config.behind_scenes_weights = config.behind_scenes_weights.normalized();
        }
        config.keywords = config.keywords.normalized();
        Self { config }
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Per-rule episode score of one candidate.
    pub fn score_episode(&self, candidate: &Candidate, context: &TargetContext) -> ScoreBreakdown {
        score_episode(
            candidate,
            &PreparedTarget::new(context),
            &self.config.weights,
            &self.config.keywords,
        )
    }

    /// Per-rule behind-the-scenes score of one candidate.
    pub fn score_behind_scenes(
        &self,
        candidate: &Candidate,
        context: &TargetContext,
    ) -> ScoreBreakdown {
        score_behind_scenes(
            candidate,
            &PreparedTarget::new(context),
            &self.config.behind_scenes_weights,
            &self.config.keywords,
        )
    }

    /// Pick the best episode match, or `None` if nothing reaches `min_score`.
    ///
    /// Ties go to the candidate seen first.
    pub fn select_best(
        &self,
        candidates: Vec<Candidate>,
        context: &TargetContext,
        min_score: Option<f64>,
    ) -> Option<Candidate> {
        let min_score = threshold(min_score, self.config.episode_min_score);
        let target = PreparedTarget::new(context);

        let mut best: Option<Candidate> = None;
        for mut candidate in candidates {
            let score =
                score_episode(&candidate, &target, &self.config.weights, &self.config.keywords)
                    .total();
            candidate.score = Some(score);
            if best.as_ref().map_or(true, |b| score > b.score_or_zero()) {
                best = Some(candidate);
            }
        }

        let best = best?;
        if best.score_or_zero() < min_score {
            warn!(
                title = %best.title,
                score = best.score_or_zero(),
                min_score,
                "Best candidate below minimum score, rejecting"
            );
            return None;
        }

        info!(
            title = %best.title,
            channel = %best.channel,
            score = best.score_or_zero(),
            "Selected episode match"
        );
        Some(best)
    }

    /// Rank behind-the-scenes candidates: keep those reaching `min_score`,
    /// sort best first, drop near-duplicates, cap at `max_results`.
    pub fn select_ranked(
        &self,
        candidates: Vec<Candidate>,
        context: &TargetContext,
        min_score: Option<f64>,
        max_results: Option<usize>,
    ) -> Vec<Candidate> {
        let min_score = threshold(min_score, self.config.extras_min_score);
        let max_results = max_results.unwrap_or(self.config.max_results);
        let target = PreparedTarget::new(context);
        let total = candidates.len();

        let mut scored: Vec<Candidate> = candidates
            .into_iter()
            .filter_map(|mut candidate| {
                let score = score_behind_scenes(
                    &candidate,
                    &target,
                    &self.config.behind_scenes_weights,
                    &self.config.keywords,
                )
                .total();
                candidate.score = Some(score);
                if score >= min_score {
                    Some(candidate)
                } else {
                    debug!(title = %candidate.title, score, "Discarding low-scoring extra");
                    None
                }
            })
            .collect();

        // sort_by is stable, so equal scores keep their search order
        scored.sort_by(|a, b| b.score_or_zero().total_cmp(&a.score_or_zero()));

        let mut ranked = remove_near_duplicates(
            scored,
            &self.config.keywords.dedup_stop_words,
            &self.config.dedup,
        );
        ranked.truncate(max_results);

        info!(
            title = %context.title(),
            candidates = total,
            selected = ranked.len(),
            min_score,
            "Ranked behind-the-scenes candidates"
        );
        ranked
    }
}

/// Caller override if usable, otherwise the configured default.
fn threshold(override_score: Option<f64>, default: f64) -> f64 {
    match override_score {
        Some(score) if !score.is_nan() => score,
        _ => default,
    }
}

/// Pick the best episode match using default keywords and thresholds.
pub fn select_best(
    candidates: Vec<Candidate>,
    context: &TargetContext,
    weights: Option<&ScoringWeights>,
    min_score: Option<f64>,
) -> Option<Candidate> {
    let config = SelectorConfig {
        weights: weights.cloned().unwrap_or_default(),
        ..Default::default()
    };
    Selector::with_config(config).select_best(candidates, context, min_score)
}

/// Rank behind-the-scenes candidates using default keywords and thresholds.
pub fn select_ranked(
    candidates: Vec<Candidate>,
    context: &TargetContext,
    weights: Option<&BehindScenesWeights>,
    min_score: Option<f64>,
    max_results: Option<usize>,
) -> Vec<Candidate> {
    let config = SelectorConfig {
        behind_scenes_weights: weights.cloned().unwrap_or_default(),
        ..Default::default()
    };
    Selector::with_config(config).select_ranked(candidates, context, min_score, max_results)
}
