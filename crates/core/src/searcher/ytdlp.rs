//! yt-dlp search backend.
//!
//! Runs `yt-dlp --dump-single-json` against a `ytsearchN:` pseudo-URL and
//! converts the playlist entries into candidates.

use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use std::process::Stdio;
use std::time::Instant;
use tokio::process::Command;
use tokio::time::{timeout, Duration};
use tracing::{debug, info, warn};

use super::types::{SearchError, SearchQuery, SearchResult, Searcher};
use crate::candidate::{Candidate, RawSearchEntry};
use crate::config::YtDlpConfig;

/// Playlist payload printed by `--dump-single-json`.
#[derive(Debug, Deserialize)]
struct SearchPayload {
    #[serde(default)]
    entries: Vec<serde_json::Value>,
}

/// Search backend driving the yt-dlp binary.
#[derive(Debug, Clone)]
pub struct YtDlpSearcher {
    config: YtDlpConfig,
}

impl YtDlpSearcher {
    pub fn new(config: YtDlpConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &YtDlpConfig {
        &self.config
    }

    /// Command line arguments for a search.
    pub fn build_args(&self, query: &SearchQuery) -> Vec<String> {
        vec![
            "--dump-single-json".to_string(),
            "--flat-playlist".to_string(),
            "--no-warnings".to_string(),
            "--sleep-requests".to_string(),
            self.config.sleep_requests_secs.to_string(),
            format!("ytsearch{}:{}", query.limit.max(1), query.query),
        ]
    }
}

/// Parse the JSON printed by yt-dlp into candidates.
///
/// Returns the usable candidates and the number of entries skipped.
pub fn parse_search_output(stdout: &[u8]) -> Result<(Vec<Candidate>, usize), SearchError> {
    let payload: SearchPayload = serde_json::from_slice(stdout)
        .map_err(|e| SearchError::InvalidResponse(e.to_string()))?;

    let mut candidates = Vec::with_capacity(payload.entries.len());
    let mut skipped = 0;
    for value in payload.entries {
        let converted = serde_json::from_value::<RawSearchEntry>(value)
            .map_err(|e| e.to_string())
            .and_then(|raw| Candidate::try_from(raw).map_err(|e| e.to_string()));
        match converted {
            Ok(candidate) => candidates.push(candidate),
            Err(e) => {
                debug!(error = %e, "Skipping unusable search entry");
                skipped += 1;
            }
        }
    }

    Ok((candidates, skipped))
}

#[async_trait]
impl Searcher for YtDlpSearcher {
    fn name(&self) -> &str {
        "yt_dlp"
    }

    async fn search(&self, query: &SearchQuery) -> Result<SearchResult, SearchError> {
        let start = Instant::now();
        let args = self.build_args(query);
        debug!(binary = %self.config.binary.display(), ?args, "Running yt-dlp search");

        let child = Command::new(&self.config.binary)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    SearchError::BinaryNotFound {
                        path: self.config.binary.clone(),
                    }
                } else {
                    SearchError::Io(e)
                }
            })?;

        let timeout_duration = Duration::from_secs(self.config.timeout_secs);
        let output = match timeout(timeout_duration, child.wait_with_output()).await {
            Ok(result) => result?,
            Err(_) => {
                // The child is killed when the timed out future drops it
                warn!(query = %query.query, "yt-dlp search timed out");
                return Err(SearchError::Timeout {
                    timeout_secs: self.config.timeout_secs,
                });
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SearchError::CommandFailed(format!(
                "yt-dlp exited with code {:?}: {}",
                output.status.code(),
                stderr.trim()
            )));
        }

        let (candidates, skipped) = parse_search_output(&output.stdout)?;
        let duration_ms = start.elapsed().as_millis() as u64;

        info!(
            query = %query.query,
            results = candidates.len(),
            skipped,
            duration_ms,
            "yt-dlp search complete"
        );

        Ok(SearchResult {
            query: query.clone(),
            candidates,
            skipped,
            duration_ms,
            searched_at: Utc::now(),
        })
    }
}
