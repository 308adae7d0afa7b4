use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

use crate::selector::SelectorConfig;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    /// Thresholds, weights and keyword lists for candidate selection
    #[serde(default)]
    pub selection: SelectorConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub searcher: Option<SearcherConfig>,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8686
}

/// Searcher configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearcherConfig {
    /// Search backend type
    pub backend: SearcherBackend,
    /// yt-dlp specific configuration
    #[serde(default)]
    pub yt_dlp: YtDlpConfig,
}

/// Available search backends
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SearcherBackend {
    YtDlp,
}

/// yt-dlp search backend configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct YtDlpConfig {
    /// Binary name or path (default: "yt-dlp")
    #[serde(default = "default_binary")]
    pub binary: PathBuf,
    /// Results requested per episode query (default: 10)
    #[serde(default = "default_episode_results")]
    pub episode_results: usize,
    /// Results requested per behind-the-scenes query (default: 15)
    #[serde(default = "default_extras_results")]
    pub extras_results: usize,
    /// Timeout for one search invocation in seconds (default: 60)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Delay yt-dlp inserts between requests in seconds (default: 1)
    #[serde(default = "default_sleep_requests")]
    pub sleep_requests_secs: u64,
}

impl Default for YtDlpConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            episode_results: default_episode_results(),
            extras_results: default_extras_results(),
            timeout_secs: default_timeout(),
            sleep_requests_secs: default_sleep_requests(),
        }
    }
}

fn default_binary() -> PathBuf {
    PathBuf::from("yt-dlp")
}

fn default_episode_results() -> usize {
    10
}

fn default_extras_results() -> usize {
    15
}

fn default_timeout() -> u64 {
    60
}

fn default_sleep_requests() -> u64 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 8686);
        assert_eq!(config.server.host.to_string(), "0.0.0.0");
        assert_eq!(config.selection.episode_min_score, 50.0);
        assert_eq!(config.selection.extras_min_score, 65.0);
        assert_eq!(config.selection.max_results, 20);
        assert!(config.searcher.is_none());
    }

    #[test]
    fn test_deserialize_server() {
        let toml = r#"
[server]
host = "127.0.0.1"
port = 9000
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host.to_string(), "127.0.0.1");
    }

    #[test]
    fn test_deserialize_partial_selection_overrides() {
        let toml = r#"
[selection]
episode_min_score = 60.0

[selection.weights]
exact_match = 120.0

[selection.behind_scenes_weights]
trailer_penalty = 10.0

[selection.dedup]
high_similarity = 0.9

[selection.keywords]
video_game_indicators = ["gameplay"]
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let selection = &config.selection;
        assert_eq!(selection.episode_min_score, 60.0);
        assert_eq!(selection.extras_min_score, 65.0);
        assert_eq!(selection.weights.exact_match, 120.0);
        assert_eq!(selection.weights.episode_in_title, 50.0);
        assert_eq!(selection.behind_scenes_weights.trailer_penalty, 10.0);
        assert_eq!(selection.dedup.high_similarity, 0.9);
        assert_eq!(selection.dedup.partial_similarity, 0.6);
        assert_eq!(selection.keywords.video_game_indicators, vec!["gameplay"]);
        assert!(!selection.keywords.bts_phrases.is_empty());
    }

    #[test]
    fn test_deserialize_with_searcher_config() {
        let toml = r#"
[searcher]
backend = "yt_dlp"

[searcher.yt_dlp]
binary = "/usr/local/bin/yt-dlp"
extras_results = 25
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let searcher = config.searcher.as_ref().unwrap();
        assert_eq!(searcher.backend, SearcherBackend::YtDlp);
        assert_eq!(searcher.yt_dlp.binary, PathBuf::from("/usr/local/bin/yt-dlp"));
        assert_eq!(searcher.yt_dlp.extras_results, 25);
        assert_eq!(searcher.yt_dlp.episode_results, 10); // default
        assert_eq!(searcher.yt_dlp.timeout_secs, 60); // default
    }

    #[test]
    fn test_searcher_section_defaults() {
        let toml = r#"
[searcher]
backend = "yt_dlp"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.searcher.unwrap().yt_dlp, YtDlpConfig::default());
    }

    #[test]
    fn test_unknown_backend_fails() {
        let toml = r#"
[searcher]
backend = "jackett"
"#;
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_serializes_without_searcher() {
        let json = serde_json::to_value(Config::default()).unwrap();
        assert_eq!(json["server"]["port"], 8686);
        assert!(json.get("searcher").is_none());
        assert_eq!(json["selection"]["max_results"], 20);
    }
}
