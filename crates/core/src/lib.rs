pub mod candidate;
pub mod config;
pub mod naming;
pub mod scoring;
pub mod searcher;
pub mod selector;
pub mod testing;

pub use candidate::{Candidate, CandidateError, RawSearchEntry, TargetContext};
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, SearcherBackend,
    SearcherConfig, ServerConfig, YtDlpConfig,
};
pub use scoring::{
    BehindScenesWeights, KeywordLists, RuleContribution, ScoreBreakdown, ScoringError,
    ScoringWeights,
};
pub use searcher::{
    EpisodeMatch, ExtrasFinder, SearchError, SearchQuery, SearchResult, Searcher, YtDlpSearcher,
};
pub use selector::{select_best, select_ranked, DedupConfig, Selector, SelectorConfig};
