//! Near-duplicate removal for ranked candidate lists.
//!
//! Re-uploads of the same clip usually differ only in punctuation, a channel
//! suffix or a few seconds of runtime, so titles are compared as word sets
//! and durations are used to confirm weaker title matches.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::candidate::Candidate;
use crate::scoring::text::dedup_words;

/// Thresholds for near-duplicate detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DedupConfig {
    /// Title similarity above which two candidates are always duplicates.
    pub high_similarity: f64,
    /// Title similarity above which close durations make a duplicate.
    pub partial_similarity: f64,
    pub duration_tolerance_secs: u64,
    /// Duration difference as a share of the longer duration.
    pub duration_tolerance_ratio: f64,
}

impl Default for DedupConfig {
    fn default() -> Self {
        Self {
            high_similarity: 0.8,
            partial_similarity: 0.6,
            duration_tolerance_secs: 30,
            duration_tolerance_ratio: 0.1,
        }
    }
}

/// Jaccard similarity of two word sets. Empty sets are never similar.
pub fn title_similarity(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let common = a.intersection(b).count();
    let union = a.union(b).count();
    common as f64 / union as f64
}

/// Both durations known and within the absolute or relative tolerance.
pub fn durations_close(a: Option<u64>, b: Option<u64>, config: &DedupConfig) -> bool {
    let (Some(a), Some(b)) = (a, b) else {
        return false;
    };
    let diff = a.abs_diff(b);
    if diff < config.duration_tolerance_secs {
        return true;
    }
    let longest = a.max(b);
    longest > 0 && (diff as f64 / longest as f64) < config.duration_tolerance_ratio
}

struct Kept {
    words: HashSet<String>,
    duration: Option<u64>,
}

fn is_near_duplicate_of(
    words: &HashSet<String>,
    duration: Option<u64>,
    kept: &Kept,
    config: &DedupConfig,
) -> bool {
    let similarity = title_similarity(words, &kept.words);
    similarity > config.high_similarity
        || (similarity > config.partial_similarity
            && durations_close(duration, kept.duration, config))
}

/// Whether two candidates look like the same video.
pub fn is_near_duplicate(
    a: &Candidate,
    b: &Candidate,
    stop_words: &[String],
    config: &DedupConfig,
) -> bool {
    let kept = Kept {
        words: dedup_words(&b.title, stop_words),
        duration: b.duration_secs,
    };
    is_near_duplicate_of(&dedup_words(&a.title, stop_words), a.duration_secs, &kept, config)
}

/// Keep each candidate only if it is not a near-duplicate of one already kept.
///
/// Input order is preserved, so callers pass candidates best first.
pub fn remove_near_duplicates(
    candidates: Vec<Candidate>,
    stop_words: &[String],
    config: &DedupConfig,
) -> Vec<Candidate> {
    let mut kept: Vec<Kept> = Vec::with_capacity(candidates.len());
    let mut unique = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let words = dedup_words(&candidate.title, stop_words);
        if kept
            .iter()
            .any(|k| is_near_duplicate_of(&words, candidate.duration_secs, k, config))
        {
            debug!(title = %candidate.title, "Dropping near-duplicate candidate");
            continue;
        }
        kept.push(Kept {
            words,
            duration: candidate.duration_secs,
        });
        unique.push(candidate);
    }

    unique
}
