//! Detection configuration.
//!
//! The thresholds below have no documented derivation; they are kept
//! configurable so they can be calibrated against a labeled corpus.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};

pub const DEFAULT_TAIL_FRACTION: f64 = 0.6;
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.1;
pub const DEFAULT_KEYWORD_RATIO: f64 = 0.7;
pub const DEFAULT_SECTION_WINDOW: usize = 20;
pub const DEFAULT_CLASSIFIER_SAMPLE_PAGES: usize = 5;
pub const DEFAULT_CLASSIFIER_MAX_CHARS: usize = 2000;
pub const DEFAULT_MAX_FEATURES: usize = 1000;
pub const DEFAULT_MAX_NGRAM: usize = 3;
pub const DEFAULT_CLASSIFIER_MAX_TOKENS: u32 = 10;
pub const DEFAULT_CLASSIFIER_TEMPERATURE: f64 = 0.1;

/// Tunable parameters for section location and code matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Fraction of the document skipped before the candidate tail begins.
    #[serde(default = "default_tail_fraction")]
    pub tail_fraction: f64,
    /// Best average cosine similarity must be strictly above this.
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,
    /// Share of description key words that must appear for a fuzzy match.
    #[serde(default = "default_keyword_ratio")]
    pub keyword_ratio: f64,
    /// Pages searched after the section start page.
    #[serde(default = "default_section_window")]
    pub section_window: usize,
    #[serde(default = "default_classifier_sample_pages")]
    pub classifier_sample_pages: usize,
    #[serde(default = "default_classifier_max_chars")]
    pub classifier_max_chars: usize,
    #[serde(default = "default_max_features")]
    pub max_features: usize,
    #[serde(default = "default_max_ngram")]
    pub max_ngram: usize,
    /// Response token budget for each classifier call.
    #[serde(default = "default_classifier_max_tokens")]
    pub classifier_max_tokens: u32,
    #[serde(default = "default_classifier_temperature")]
    pub classifier_temperature: f64,
}

fn default_tail_fraction() -> f64 {
    DEFAULT_TAIL_FRACTION
}
fn default_similarity_threshold() -> f64 {
    DEFAULT_SIMILARITY_THRESHOLD
}
fn default_keyword_ratio() -> f64 {
    DEFAULT_KEYWORD_RATIO
}
fn default_section_window() -> usize {
    DEFAULT_SECTION_WINDOW
}
fn default_classifier_sample_pages() -> usize {
    DEFAULT_CLASSIFIER_SAMPLE_PAGES
}
fn default_classifier_max_chars() -> usize {
    DEFAULT_CLASSIFIER_MAX_CHARS
}
fn default_max_features() -> usize {
    DEFAULT_MAX_FEATURES
}
fn default_max_ngram() -> usize {
    DEFAULT_MAX_NGRAM
}
fn default_classifier_max_tokens() -> u32 {
    DEFAULT_CLASSIFIER_MAX_TOKENS
}
fn default_classifier_temperature() -> f64 {
    DEFAULT_CLASSIFIER_TEMPERATURE
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            tail_fraction: DEFAULT_TAIL_FRACTION,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            keyword_ratio: DEFAULT_KEYWORD_RATIO,
            section_window: DEFAULT_SECTION_WINDOW,
            classifier_sample_pages: DEFAULT_CLASSIFIER_SAMPLE_PAGES,
            classifier_max_chars: DEFAULT_CLASSIFIER_MAX_CHARS,
            max_features: DEFAULT_MAX_FEATURES,
            max_ngram: DEFAULT_MAX_NGRAM,
            classifier_max_tokens: DEFAULT_CLASSIFIER_MAX_TOKENS,
            classifier_temperature: DEFAULT_CLASSIFIER_TEMPERATURE,
        }
    }
}

impl DetectionConfig {
    /// Load config from an optional JSON file, then apply env overrides.
    ///
    /// A missing file is an error only when a path was given explicitly.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) => {
                let raw = std::fs::read_to_string(p).map_err(|e| {
                    Error::Config(format!("cannot read {}: {}", p.display(), e))
                })?;
                let parsed: DetectionConfig = serde_json::from_str(&raw)?;
                info!("Loaded detection config from {}", p.display());
                parsed
            }
            None => Self::default(),
        };

        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Override individual fields from `GRISCAN_*` environment variables.
    pub fn apply_env(&mut self) {
        if let Some(v) = env_f64("GRISCAN_SIMILARITY_THRESHOLD") {
            self.similarity_threshold = v;
        }
        if let Some(v) = env_f64("GRISCAN_KEYWORD_RATIO") {
            self.keyword_ratio = v;
        }
        if let Some(v) = env_f64("GRISCAN_TAIL_FRACTION") {
            self.tail_fraction = v;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.tail_fraction) {
            return Err(Error::Config(format!(
                "tail_fraction must be in [0, 1), got {}",
                self.tail_fraction
            )));
        }
        if !(self.keyword_ratio > 0.0 && self.keyword_ratio <= 1.0) {
            return Err(Error::Config(format!(
                "keyword_ratio must be in (0, 1], got {}",
                self.keyword_ratio
            )));
        }
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(Error::Config(format!(
                "similarity_threshold must be in [0, 1], got {}",
                self.similarity_threshold
            )));
        }
        if self.section_window == 0
            || self.classifier_sample_pages == 0
            || self.max_features == 0
            || self.max_ngram == 0
        {
            return Err(Error::Config(
                "section_window, classifier_sample_pages, max_features and max_ngram must be non-zero"
                    .into(),
            ));
        }
        Ok(())
    }

    /// Zero-based index of the first candidate page: `floor(tail_fraction * total)`.
    pub fn tail_start(&self, total_pages: usize) -> usize {
        ((total_pages as f64) * self.tail_fraction).floor() as usize
    }
}

fn env_f64(key: &str) -> Option<f64> {
    let value = std::env::var(key).ok()?;
    match value.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            debug!("Ignoring non-numeric {}={}", key, value);
            None
        }
    }
}
