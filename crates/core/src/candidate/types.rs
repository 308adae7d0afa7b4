//! Types for search result candidates and the target they are matched against.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base URL used when a search entry does not carry its own URL.
pub const WATCH_URL_BASE: &str = "https://www.youtube.com/watch?v=";

/// Errors raised when building candidates or target contexts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CandidateError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// The series, episode or movie being searched for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "TargetContextSpec")]
pub struct TargetContext {
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    secondary_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    network: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference_year: Option<i32>,
}

/// Unvalidated wire form of a [`TargetContext`].
#[derive(Debug, Clone, Deserialize)]
struct TargetContextSpec {
    title: String,
    #[serde(default)]
    secondary_title: Option<String>,
    #[serde(default)]
    network: Option<String>,
    #[serde(default)]
    reference_year: Option<i32>,
}

impl TryFrom<TargetContextSpec> for TargetContext {
    type Error = CandidateError;

    fn try_from(spec: TargetContextSpec) -> Result<Self, Self::Error> {
        let mut context = TargetContext::new(spec.title)?;
        context.secondary_title = non_blank(spec.secondary_title);
        context.network = non_blank(spec.network);
        context.reference_year = spec.reference_year;
        Ok(context)
    }
}

impl TargetContext {
    /// Create a context for `title`. Fails if the title is blank.
    pub fn new(title: impl Into<String>) -> Result<Self, CandidateError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(CandidateError::MissingField("title"));
        }
        Ok(Self {
            title,
            secondary_title: None,
            network: None,
            reference_year: None,
        })
    }

    /// Target a specific episode of the series.
    pub fn with_episode(mut self, episode_title: impl Into<String>) -> Self {
        self.secondary_title = non_blank(Some(episode_title.into()));
        self
    }

    pub fn with_network(mut self, network: impl Into<String>) -> Self {
        self.network = non_blank(Some(network.into()));
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.reference_year = Some(year);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn secondary_title(&self) -> Option<&str> {
        self.secondary_title.as_deref()
    }

    pub fn network(&self) -> Option<&str> {
        self.network.as_deref()
    }

    pub fn reference_year(&self) -> Option<i32> {
        self.reference_year
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// One search result under evaluation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Candidate {
    /// Opaque identifier from the video source.
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub channel: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub like_count: Option<u64>,
    /// Upload date in `YYYYMMDD` form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Set by the selector once the candidate has been scored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl Candidate {
    /// Create a candidate with only the required fields set.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Result<Self, CandidateError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(CandidateError::MissingField("id"));
        }
        Ok(Self {
            id,
            title: title.into(),
            channel: String::new(),
            description: String::new(),
            duration_secs: None,
            view_count: None,
            like_count: None,
            upload_date: None,
            url: None,
            score: None,
        })
    }

    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = channel.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_duration(mut self, secs: u64) -> Self {
        self.duration_secs = Some(secs);
        self
    }

    pub fn with_views(mut self, views: u64) -> Self {
        self.view_count = Some(views);
        self
    }

    pub fn with_likes(mut self, likes: u64) -> Self {
        self.like_count = Some(likes);
        self
    }

    pub fn with_upload_date(mut self, date: impl Into<String>) -> Self {
        self.upload_date = Some(date.into());
        self
    }

    /// Year of upload, if the upload date starts with four digits.
    pub fn upload_year(&self) -> Option<i32> {
        let date = self.upload_date.as_deref()?;
        let prefix = date.get(..4)?;
        if !prefix.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        prefix.parse().ok()
    }

    /// URL of the video page, derived from the id when the source gave none.
    pub fn watch_url(&self) -> String {
        match &self.url {
            Some(url) if url.starts_with("http") => url.clone(),
            _ => format!("{}{}", WATCH_URL_BASE, self.id),
        }
    }

    /// Score assigned during selection, or 0 if the candidate was never scored.
    pub fn score_or_zero(&self) -> f64 {
        self.score.unwrap_or(0.0)
    }
}

/// A raw entry as returned by the video search backend.
///
/// Every field is optional; numeric fields are accepted as floats because
/// the backend reports durations like `312.0`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawSearchEntry {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub uploader: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub view_count: Option<f64>,
    #[serde(default)]
    pub like_count: Option<f64>,
    #[serde(default)]
    pub upload_date: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub webpage_url: Option<String>,
}

impl TryFrom<RawSearchEntry> for Candidate {
    type Error = CandidateError;

    fn try_from(raw: RawSearchEntry) -> Result<Self, Self::Error> {
        let id = raw.id.ok_or(CandidateError::MissingField("id"))?;
        let title = raw.title.ok_or(CandidateError::MissingField("title"))?;
        let mut candidate = Candidate::new(id, title)?;

        candidate.channel = raw.channel.or(raw.uploader).unwrap_or_default();
        candidate.description = raw.description.unwrap_or_default();
        candidate.duration_secs = positive_count(raw.duration);
        candidate.view_count = non_negative_count(raw.view_count);
        candidate.like_count = non_negative_count(raw.like_count);
        candidate.upload_date = raw.upload_date.filter(|d| !d.trim().is_empty());
        candidate.url = raw.webpage_url.or(raw.url);
        Ok(candidate)
    }
}

fn positive_count(value: Option<f64>) -> Option<u64> {
    value
        .filter(|v| v.is_finite() && *v > 0.0)
        .map(|v| v.round() as u64)
}

fn non_negative_count(value: Option<f64>) -> Option<u64> {
    value
        .filter(|v| v.is_finite() && *v >= 0.0)
        .map(|v| v.round() as u64)
}
