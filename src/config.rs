/// Configuration management using figment
///
/// Loads configuration with this precedence (highest wins):
/// 1. Defaults (hardcoded)
/// 2. TOML file: feedrank.toml (in working directory)
/// 3. Environment variables: prefixed FEEDRANK_ (e.g., FEEDRANK_LOG_LEVEL=debug)
///
/// All sections are plain immutable values handed to the components that need
/// them — there is no ambient global configuration state, so tests can build
/// their own `Config` with overrides.

use figment::{
    Figment,
    providers::{Env, Format, Toml, Serialized},
};
use serde::{Deserialize, Serialize};
use crate::errors::FeedrankError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Vector-space construction limits for the similarity engine
    #[serde(default)]
    pub vectorizer: VectorizerConfig,

    /// Text normalization settings
    #[serde(default)]
    pub normalizer: NormalizerConfig,

    /// Score fusion weights for the ranker
    #[serde(default)]
    pub scoring: ScoringConfig,
}

/// Limits for the per-pair TF-IDF vector space.
///
/// Defaults mirror the deployed tuning: up to 1000 features, unigrams and
/// bigrams, a term must appear in at least `min_df` documents and in no more
/// than `max_df` (fraction) of them. The corpus of each comparison is exactly
/// two documents, which makes `max_df = 0.8` exclude every term shared by
/// both sides — see similarity.rs for why that is kept as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerConfig {
    /// Maximum vocabulary size, ranked by aggregate frequency when it binds
    #[serde(default = "default_max_features")]
    pub max_features: usize,

    /// Minimum document count a term must appear in
    #[serde(default = "default_min_df")]
    pub min_df: usize,

    /// Maximum fraction of documents a term may appear in (0.0–1.0)
    #[serde(default = "default_max_df")]
    pub max_df: f64,

    /// Smallest n-gram length to extract
    #[serde(default = "default_ngram_min")]
    pub ngram_min: usize,

    /// Largest n-gram length to extract
    #[serde(default = "default_ngram_max")]
    pub ngram_max: usize,
}

/// Settings for the text normalizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Tokens shorter than this many characters are dropped
    #[serde(default = "default_min_token_chars")]
    pub min_token_chars: usize,

    /// Additional stop words appended to the built-in list
    #[serde(default)]
    pub extra_stop_words: Vec<String>,
}

/// Fusion weights for combining similarity and engagement.
///
/// The combined score must be monotonic in both sub-scores, so both weights
/// must be non-negative. Defaults weight content similarity 0.8 and
/// engagement 0.2.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default = "default_similarity_weight")]
    pub similarity_weight: f64,

    #[serde(default = "default_engagement_weight")]
    pub engagement_weight: f64,

    /// Populate per-dimension score breakdowns on ranked results
    #[serde(default)]
    pub debug_scoring: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_features() -> usize {
    1000
}

fn default_min_df() -> usize {
    1
}

fn default_max_df() -> f64 {
    0.8
}

fn default_ngram_min() -> usize {
    1
}

fn default_ngram_max() -> usize {
    2
}

fn default_min_token_chars() -> usize {
    3
}

fn default_similarity_weight() -> f64 {
    0.8
}

fn default_engagement_weight() -> f64 {
    0.2
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: default_log_level(),
            vectorizer: VectorizerConfig::default(),
            normalizer: NormalizerConfig::default(),
            scoring: ScoringConfig::default(),
        }
    }
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        VectorizerConfig {
            max_features: default_max_features(),
            min_df: default_min_df(),
            max_df: default_max_df(),
            ngram_min: default_ngram_min(),
            ngram_max: default_ngram_max(),
        }
    }
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        NormalizerConfig {
            min_token_chars: default_min_token_chars(),
            extra_stop_words: Vec::new(),
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        ScoringConfig {
            similarity_weight: default_similarity_weight(),
            engagement_weight: default_engagement_weight(),
            debug_scoring: false,
        }
    }
}

impl Config {
    /// Load configuration from defaults, TOML file, and environment variables
    ///
    /// Environment variables override TOML file values.
    /// Example: FEEDRANK_SCORING__SIMILARITY_WEIGHT=0.9 overrides
    /// scoring.similarity_weight in feedrank.toml
    pub fn load() -> Result<Config, FeedrankError> {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file("feedrank.toml"))
            .merge(Env::prefixed("FEEDRANK_").split("__"))
            .extract()
            .map_err(|e| FeedrankError::Config(format!("Failed to load config: {}", e)))
    }
}
