//! Extractor — runs one document through locate, match and assemble.

use std::path::Path;
use std::time::{Duration, Instant};

use griscan_core::{Catalog, DetectionConfig, DetectionMethod, DisclosureRecord, PageRecord, Result};
use griscan_ingest::load_pages;
use griscan_locate::{CompletionEndpoint, SectionHit, SectionLocator};
use griscan_match::{assemble, CodeMatcher, ExtractionSummary};
use tracing::{error, info, warn};

/// Outcome of one extraction run.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub page_count: usize,
    /// Located section start, if any strategy found one.
    pub section: Option<SectionHit>,
    pub records: Vec<DisclosureRecord>,
    pub elapsed: Duration,
}

impl Extraction {
    pub fn summary(&self) -> ExtractionSummary {
        ExtractionSummary::from_records(&self.records)
    }
}

pub struct Extractor {
    catalog: Catalog,
    locator: SectionLocator,
    matcher: CodeMatcher,
    method: DetectionMethod,
}

impl Extractor {
    pub fn new(catalog: Catalog, config: DetectionConfig) -> Self {
        Self {
            catalog,
            locator: SectionLocator::new(catalog, config.clone()),
            matcher: CodeMatcher::new(catalog, config),
            method: DetectionMethod::Auto,
        }
    }

    /// Enable the classifier strategy as the last fallback.
    pub fn with_classifier(mut self, endpoint: Box<dyn CompletionEndpoint>, config: DetectionConfig) -> Self {
        self.locator = self.locator.with_classifier(endpoint, config);
        self
    }

    pub fn with_method(mut self, method: DetectionMethod) -> Self {
        self.method = method;
        self
    }

    pub fn has_classifier(&self) -> bool {
        self.locator.has_classifier()
    }

    /// Load `path` and run the pipeline. Only an unreadable source is an error.
    pub fn extract(&self, path: &Path) -> Result<Extraction> {
        let started = Instant::now();
        info!("Starting GRI extraction for {}", path.display());

        let pages = load_pages(path).map_err(|e| {
            error!("Failed to load {}: {}", path.display(), e);
            e
        })?;

        let mut extraction = self.extract_pages(&pages);
        extraction.elapsed = started.elapsed();
        Ok(extraction)
    }

    /// Run the pipeline on already-normalized pages.
    pub fn extract_pages(&self, pages: &[PageRecord]) -> Extraction {
        let started = Instant::now();

        if pages.is_empty() {
            warn!("No pages extracted from document");
        }

        let section = if pages.is_empty() {
            None
        } else {
            self.locator.locate(pages, self.method)
        };

        let matches = section.map(|hit| self.matcher.match_section(pages, hit.page));
        let records = assemble(&self.catalog, matches.as_ref());

        Extraction {
            page_count: pages.len(),
            section,
            records,
            elapsed: started.elapsed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use griscan_core::{DisclosureStatus, GRI_CATALOG};
    use griscan_ingest::pages_from_raw;
    use griscan_locate::StrategyKind;

    fn extractor() -> Extractor {
        Extractor::new(GRI_CATALOG, DetectionConfig::default())
    }

    struct Never;

    impl CompletionEndpoint for Never {
        fn complete(&self, _: &str, _: u32, _: f64) -> Result<String> {
            Ok("NO".into())
        }
    }

    #[test]
    fn test_classifier_is_opt_in() {
        assert!(!extractor().has_classifier());
        let with = extractor().with_classifier(Box::new(Never), DetectionConfig::default());
        assert!(with.has_classifier());
    }

    #[test]
    fn test_empty_document_is_all_not_found() {
        let extraction = extractor().extract_pages(&[]);
        assert_eq!(extraction.page_count, 0);
        assert_eq!(extraction.section, None);
        assert_eq!(extraction.records.len(), GRI_CATALOG.len());
        assert!(extraction.records.iter().all(|r| r.status == DisclosureStatus::NotFound));
    }

    #[test]
    fn test_pattern_method_only() {
        let mut raw: Vec<String> = (1..=10).map(|i| format!("Operations review {}", i)).collect();
        raw[8] = "GRI Content Index 2-1 Organizational details".into();
        let pages = pages_from_raw(&raw);

        let extraction = extractor()
            .with_method(DetectionMethod::Pattern)
            .extract_pages(&pages);
        let hit = extraction.section.unwrap();
        assert_eq!(hit.page, 9);
        assert_eq!(hit.strategy, StrategyKind::Pattern);
        assert!(extraction.summary().found >= 1);
    }
}
