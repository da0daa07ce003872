//! LLM classifier strategy.
//!
//! Asks a chat-completion endpoint, one sampled page at a time, whether the
//! page holds a GRI index. The first affirmative answer wins.

use griscan_core::{DetectionConfig, PageRecord, Result};
use tracing::{info, warn};

use crate::chain::{SectionStrategy, StrategyKind};
use crate::window::candidate_pages;

/// A text-completion backend. Implemented by the HTTP client in
/// `griscan-llm`; tests substitute canned answers.
pub trait CompletionEndpoint: Send + Sync {
    fn complete(&self, prompt: &str, max_tokens: u32, temperature: f64) -> Result<String>;
}

pub struct ClassifierStrategy {
    endpoint: Box<dyn CompletionEndpoint>,
    config: DetectionConfig,
}

impl ClassifierStrategy {
    pub fn new(endpoint: Box<dyn CompletionEndpoint>, config: DetectionConfig) -> Self {
        Self { endpoint, config }
    }

    /// Evenly spaced sample of the candidate pages, at most
    /// `classifier_sample_pages` long.
    pub fn sample<'a>(&self, pages: &'a [PageRecord]) -> Vec<&'a PageRecord> {
        let candidates = candidate_pages(pages, &self.config);
        let limit = self.config.classifier_sample_pages.max(1);
        let step = (candidates.len() / limit).max(1);
        candidates.iter().step_by(step).take(limit).collect()
    }

    pub fn locate(&self, pages: &[PageRecord]) -> Option<u32> {
        let sample = self.sample(pages);
        info!("Using LLM analysis on {} sample pages", sample.len());

        for page in sample {
            let prompt = build_prompt(page, self.config.classifier_max_chars);
            match self.endpoint.complete(
                &prompt,
                self.config.classifier_max_tokens,
                self.config.classifier_temperature,
            ) {
                Ok(answer) if is_affirmative(&answer) => {
                    info!("LLM detected GRI section on page {}", page.page_number);
                    return Some(page.page_number);
                }
                Ok(_) => {}
                Err(e) => warn!("LLM analysis failed for page {}: {}", page.page_number, e),
            }
        }

        warn!("LLM did not detect GRI section");
        None
    }
}

fn is_affirmative(answer: &str) -> bool {
    answer.trim().to_uppercase() == "YES"
}

fn build_prompt(page: &PageRecord, max_chars: usize) -> String {
    let text: String = page.text.chars().take(max_chars).collect();
    format!(
        "Analyze this text from page {page} of a sustainability report.\n\
         Does this page contain a GRI (Global Reporting Initiative) content index, \
         GRI standards disclosure section, or GRI reference table?\n\n\
         Look for:\n\
         - GRI Content Index\n\
         - GRI Standards references\n\
         - Systematic listing of GRI disclosures\n\
         - Table of GRI codes (like 2-1, 3-2, 401-1, etc.)\n\n\
         Text:\n{text}\n\n\
         Answer only: YES or NO",
        page = page.page_number,
        text = text,
    )
}

impl SectionStrategy for ClassifierStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Classifier
    }

    fn locate(&self, pages: &[PageRecord]) -> Option<u32> {
        ClassifierStrategy::locate(self, pages)
    }
}
