//! Header pattern strategy.
//!
//! Matches English and Indonesian phrasings of a GRI index heading, or the
//! full name of any catalog standard, on the candidate pages.

use griscan_core::{Catalog, DetectionConfig, PageRecord};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use tracing::{info, warn};

use crate::chain::{SectionStrategy, StrategyKind};
use crate::window::candidate_pages;

const HEADER_PATTERNS: &[&str] = &[
    r"GRI\s+(?:Content\s+)?Index",
    r"GRI\s+\d+:\s+[A-Za-z\s]+\d{4}",
    r"Global\s+Reporting\s+Initiative",
    r"GRI\s+Standards?\s+Index",
    r"Sustainability\s+Reporting\s+Standards?",
    // Indonesian
    r"Indeks\s+GRI",
    r"Standar\s+Pelaporan\s+Berkelanjutan",
    r"GRI\s+Disclosure",
    r"GRI\s+Reference",
];

static HEADER_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    HEADER_PATTERNS
        .iter()
        .map(|p| {
            RegexBuilder::new(p)
                .case_insensitive(true)
                .build()
                .expect("static header pattern")
        })
        .collect()
});

pub struct PatternStrategy {
    catalog: Catalog,
    config: DetectionConfig,
}

impl PatternStrategy {
    pub fn new(catalog: Catalog, config: DetectionConfig) -> Self {
        Self { catalog, config }
    }

    /// First candidate page matching a header pattern or a standard name.
    pub fn locate(&self, pages: &[PageRecord]) -> Option<u32> {
        let candidates = candidate_pages(pages, &self.config);
        if let (Some(first), Some(last)) = (candidates.first(), candidates.last()) {
            info!(
                "Searching for GRI patterns in pages {} to {}",
                first.page_number, last.page_number
            );
        }

        for page in candidates {
            if let Some(m) = HEADER_RES.iter().find_map(|re| re.find(&page.text)) {
                info!("Found GRI pattern '{}' on page {}", m.as_str(), page.page_number);
                return Some(page.page_number);
            }

            let lower = page.text.to_lowercase();
            if let Some(standard) = self
                .catalog
                .standards()
                .iter()
                .find(|s| lower.contains(&s.name.to_lowercase()))
            {
                info!("Found GRI standard '{}' on page {}", standard.name, page.page_number);
                return Some(page.page_number);
            }
        }

        warn!("No GRI patterns found using pattern matching");
        None
    }
}

impl SectionStrategy for PatternStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Pattern
    }

    fn locate(&self, pages: &[PageRecord]) -> Option<u32> {
        PatternStrategy::locate(self, pages)
    }
}
