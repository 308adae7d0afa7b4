use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Score thresholds and dedup thresholds are finite
/// - max_results is not 0
/// - Weights are finite, non-negative magnitudes
/// - Searcher result counts and timeout are not 0
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    // Server validation
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    // Selection validation
    let selection = &config.selection;
    let thresholds = [
        ("selection.episode_min_score", selection.episode_min_score),
        ("selection.extras_min_score", selection.extras_min_score),
        ("selection.dedup.high_similarity", selection.dedup.high_similarity),
        ("selection.dedup.partial_similarity", selection.dedup.partial_similarity),
        (
            "selection.dedup.duration_tolerance_ratio",
            selection.dedup.duration_tolerance_ratio,
        ),
    ];
    for (name, value) in thresholds {
        if !value.is_finite() {
            return Err(ConfigError::ValidationError(format!(
                "{} must be a finite number",
                name
            )));
        }
    }

    if selection.max_results == 0 {
        return Err(ConfigError::ValidationError(
            "selection.max_results cannot be 0".to_string(),
        ));
    }

    selection
        .weights
        .validate()
        .map_err(|e| ConfigError::ValidationError(format!("selection.weights: {}", e)))?;
    selection.behind_scenes_weights.validate().map_err(|e| {
        ConfigError::ValidationError(format!("selection.behind_scenes_weights: {}", e))
    })?;

    // Searcher validation
    if let Some(searcher) = &config.searcher {
        let yt_dlp = &searcher.yt_dlp;
        if yt_dlp.episode_results == 0 || yt_dlp.extras_results == 0 {
            return Err(ConfigError::ValidationError(
                "searcher.yt_dlp result counts cannot be 0".to_string(),
            ));
        }
        if yt_dlp.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "searcher.yt_dlp.timeout_secs cannot be 0".to_string(),
            ));
        }
    }

    Ok(())
}
