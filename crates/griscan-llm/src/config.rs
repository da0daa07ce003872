//! Provider configuration for the classifier endpoint.

use std::path::Path;

use griscan_core::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

pub const DEFAULT_GROQ_MODEL: &str = "llama3-8b-8192";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

pub const GROQ_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";

/// OpenAI-compatible chat-completion providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Groq,
    OpenAI,
}

impl Provider {
    pub fn default_url(&self) -> &'static str {
        match self {
            Self::Groq => GROQ_URL,
            Self::OpenAI => OPENAI_URL,
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Groq => write!(f, "groq"),
            Self::OpenAI => write!(f, "openai"),
        }
    }
}

/// A provider choice with everything needed to call it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProvider {
    pub provider: Provider,
    pub model: String,
    pub api_key: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmConfig {
    /// `auto`, `groq` or `openai`.
    #[serde(default = "default_preferred")]
    pub preferred_provider: String,
    #[serde(default)]
    pub groq_api_key: Option<String>,
    #[serde(default)]
    pub openai_api_key: Option<String>,
    #[serde(default = "default_groq_model")]
    pub groq_model: String,
    #[serde(default = "default_openai_model")]
    pub openai_model: String,
    /// Overrides the provider's endpoint URL (self-hosted gateways, tests).
    #[serde(default)]
    pub base_url: Option<String>,
}

fn default_preferred() -> String {
    "auto".into()
}
fn default_groq_model() -> String {
    DEFAULT_GROQ_MODEL.into()
}
fn default_openai_model() -> String {
    DEFAULT_OPENAI_MODEL.into()
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            preferred_provider: default_preferred(),
            groq_api_key: None,
            openai_api_key: None,
            groq_model: default_groq_model(),
            openai_model: default_openai_model(),
            base_url: None,
        }
    }
}

impl LlmConfig {
    /// Load from an optional JSON file, then fill missing keys from
    /// `GROQ_API_KEY` / `OPENAI_API_KEY`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) => {
                let raw = std::fs::read_to_string(p).map_err(|e| {
                    Error::Config(format!("cannot read {}: {}", p.display(), e))
                })?;
                let parsed: LlmConfig = serde_json::from_str(&raw)?;
                info!("Loaded LLM config from {}", p.display());
                parsed
            }
            None => Self::default(),
        };

        if config.groq_api_key.is_none() {
            config.groq_api_key = env_key("GROQ_API_KEY");
        }
        if config.openai_api_key.is_none() {
            config.openai_api_key = env_key("OPENAI_API_KEY");
        }

        Ok(config)
    }

    /// An explicit key (e.g. from the command line) takes precedence.
    pub fn with_groq_key(mut self, key: Option<String>) -> Self {
        if let Some(k) = key.filter(|k| !k.trim().is_empty()) {
            self.groq_api_key = Some(k);
        }
        self
    }

    /// Which provider to call, if any key is configured.
    pub fn resolve_provider(&self) -> Option<ResolvedProvider> {
        let groq = || {
            self.groq_api_key
                .as_ref()
                .map(|k| self.resolved(Provider::Groq, &self.groq_model, k))
        };
        let openai = || {
            self.openai_api_key
                .as_ref()
                .map(|k| self.resolved(Provider::OpenAI, &self.openai_model, k))
        };

        match self.preferred_provider.to_lowercase().as_str() {
            "groq" => groq(),
            "openai" => openai(),
            // Auto mode: Groq > OpenAI
            _ => groq().or_else(openai),
        }
    }

    fn resolved(&self, provider: Provider, model: &str, key: &str) -> ResolvedProvider {
        ResolvedProvider {
            provider,
            model: model.to_string(),
            api_key: key.to_string(),
            url: self
                .base_url
                .clone()
                .unwrap_or_else(|| provider.default_url().to_string()),
        }
    }
}

fn env_key(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
