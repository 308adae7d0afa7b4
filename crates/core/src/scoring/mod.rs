//! Heuristic scoring of search candidates.
//!
//! Two variants share the same text helpers:
//! - [`score_episode`] rates how likely a video is a specific special episode.
//! - [`score_behind_scenes`] rates how likely a video is official BTS material.

mod behind_scenes;
mod episode;
mod keywords;
pub mod text;
mod weights;

use std::fmt;

use serde::Serialize;

pub use behind_scenes::{score_behind_scenes, ChannelKind};
pub use episode::score_episode;
pub use keywords::KeywordLists;
pub use text::PreparedTarget;
pub use weights::{BehindScenesWeights, ScoringError, ScoringWeights};

/// Points contributed by a single rule. Penalties are negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RuleContribution {
    pub rule: &'static str,
    pub points: f64,
}

/// Per-rule record of how a score was reached.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    contributions: Vec<RuleContribution>,
}

impl ScoreBreakdown {
    /// Record a bonus. Zero contributions are not recorded.
    pub fn add(&mut self, rule: &'static str, points: f64) {
        if points != 0.0 {
            self.contributions.push(RuleContribution { rule, points });
        }
    }

    /// Record a penalty given as a magnitude.
    pub fn subtract(&mut self, rule: &'static str, points: f64) {
        self.add(rule, -points);
    }

    pub fn total(&self) -> f64 {
        self.contributions.iter().map(|c| c.points).sum()
    }

    pub fn contributions(&self) -> &[RuleContribution] {
        &self.contributions
    }
}

impl fmt::Display for ScoreBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.contributions.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}={:+.1}", c.rule, c.points)?;
        }
        Ok(())
    }
}
