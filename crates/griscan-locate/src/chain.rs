//! Ordered fallback over section strategies.

use griscan_core::{Catalog, DetectionConfig, DetectionMethod, PageRecord};
use serde::Serialize;
use tracing::{info, warn};

use crate::classifier::{ClassifierStrategy, CompletionEndpoint};
use crate::pattern::PatternStrategy;
use crate::similarity::SimilarityStrategy;

/// Which strategy produced a section start page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Pattern,
    Similarity,
    Classifier,
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pattern => write!(f, "pattern"),
            Self::Similarity => write!(f, "similarity"),
            Self::Classifier => write!(f, "classifier"),
        }
    }
}

/// A located section start and the strategy that found it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionHit {
    /// 1-indexed page number.
    pub page: u32,
    pub strategy: StrategyKind,
}

/// One way of guessing the section start page.
pub trait SectionStrategy {
    fn kind(&self) -> StrategyKind;

    fn locate(&self, pages: &[PageRecord]) -> Option<u32>;
}

/// Runs the strategies in priority order; the first answer wins.
pub struct SectionLocator {
    pattern: PatternStrategy,
    similarity: SimilarityStrategy,
    classifier: Option<ClassifierStrategy>,
}

impl SectionLocator {
    pub fn new(catalog: Catalog, config: DetectionConfig) -> Self {
        Self {
            pattern: PatternStrategy::new(catalog, config.clone()),
            similarity: SimilarityStrategy::new(config.clone()),
            classifier: None,
        }
    }

    /// Enable the classifier strategy with the given endpoint.
    pub fn with_classifier(mut self, endpoint: Box<dyn CompletionEndpoint>, config: DetectionConfig) -> Self {
        self.classifier = Some(ClassifierStrategy::new(endpoint, config));
        self
    }

    pub fn has_classifier(&self) -> bool {
        self.classifier.is_some()
    }

    /// Strategies that `method` runs, in order. The classifier is only
    /// present when an endpoint was configured.
    fn chain(&self, method: DetectionMethod) -> Vec<&dyn SectionStrategy> {
        let classifier = self.classifier.as_ref().map(|c| c as &dyn SectionStrategy);
        match method {
            DetectionMethod::Auto => {
                let mut chain = vec![
                    &self.pattern as &dyn SectionStrategy,
                    &self.similarity as &dyn SectionStrategy,
                ];
                chain.extend(classifier);
                chain
            }
            DetectionMethod::Pattern => vec![&self.pattern as &dyn SectionStrategy],
            DetectionMethod::Similarity => vec![&self.similarity as &dyn SectionStrategy],
            DetectionMethod::Classifier => {
                if classifier.is_none() {
                    warn!("Classifier endpoint not available for LLM detection");
                }
                classifier.into_iter().collect()
            }
        }
    }

    pub fn locate(&self, pages: &[PageRecord], method: DetectionMethod) -> Option<SectionHit> {
        for strategy in self.chain(method) {
            if let Some(page) = strategy.locate(pages) {
                let hit = SectionHit {
                    page,
                    strategy: strategy.kind(),
                };
                info!("GRI section starts on page {} ({} strategy)", hit.page, hit.strategy);
                return Some(hit);
            }
            info!("{} strategy found nothing, falling back", strategy.kind());
        }

        warn!("Could not detect GRI section using any method");
        None
    }
}
