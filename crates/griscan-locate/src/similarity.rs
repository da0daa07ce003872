//! TF-IDF similarity strategy.
//!
//! Fits a vectorizer on the non-blank candidate pages together with a fixed
//! set of GRI queries, then picks the page with the highest mean cosine
//! similarity to those queries.

use griscan_core::{DetectionConfig, PageRecord};
use tracing::{error, info, warn};

use crate::chain::{SectionStrategy, StrategyKind};
use crate::tfidf::{cosine_similarity, TfidfVectorizer};
use crate::window::candidate_pages;

pub const GRI_QUERIES: &[&str] = &[
    "GRI content index global reporting initiative sustainability standards disclosure",
    "GRI standards disclosure table",
    "GRI 2: General Disclosures 2021",
    "GRI 2 general disclosures organizational details governance",
    "GRI 3 material topics process management",
    "environmental social economic performance emissions water energy",
    "biodiversity waste health safety human rights labor practices",
];

pub struct SimilarityStrategy {
    config: DetectionConfig,
}

impl SimilarityStrategy {
    pub fn new(config: DetectionConfig) -> Self {
        Self { config }
    }

    /// Mean similarity of each non-blank candidate page to the queries,
    /// paired with its page number. `None` when nothing can be scored.
    pub fn score_pages(&self, pages: &[PageRecord]) -> Option<Vec<(u32, f64)>> {
        let candidates: Vec<&PageRecord> = candidate_pages(pages, &self.config)
            .iter()
            .filter(|p| !p.is_blank())
            .collect();
        if candidates.is_empty() {
            return None;
        }
        info!(
            "Using TF-IDF search on pages {} to {}",
            candidates[0].page_number,
            candidates[candidates.len() - 1].page_number
        );

        let docs: Vec<&str> = candidates
            .iter()
            .map(|p| p.text.as_str())
            .chain(GRI_QUERIES.iter().copied())
            .collect();

        let mut vectorizer = TfidfVectorizer::new(self.config.max_ngram, self.config.max_features);
        let matrix = match vectorizer.fit_transform(&docs) {
            Ok(m) => m,
            Err(e) => {
                error!("TF-IDF search failed: {}", e);
                return None;
            }
        };

        let n_pages = candidates.len();
        let scores = candidates
            .iter()
            .enumerate()
            .map(|(i, page)| {
                let total: f64 = (0..GRI_QUERIES.len())
                    .map(|q| cosine_similarity(matrix.row(i), matrix.row(n_pages + q)))
                    .sum();
                (page.page_number, total / GRI_QUERIES.len() as f64)
            })
            .collect();
        Some(scores)
    }

    pub fn locate(&self, pages: &[PageRecord]) -> Option<u32> {
        let scores = self.score_pages(pages)?;
        select_best(&scores, self.config.similarity_threshold)
    }
}

/// Page with the highest score, provided it is strictly above `threshold`.
/// The earliest page wins ties.
pub fn select_best(scores: &[(u32, f64)], threshold: f64) -> Option<u32> {
    let mut best: Option<(u32, f64)> = None;
    for &(page, score) in scores {
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((page, score));
        }
    }

    let (page, score) = best?;
    if score > threshold {
        info!("TF-IDF found potential GRI section on page {} (similarity: {:.3})", page, score);
        Some(page)
    } else {
        warn!("TF-IDF similarity too low (max: {:.3})", score);
        None
    }
}

impl SectionStrategy for SimilarityStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Similarity
    }

    fn locate(&self, pages: &[PageRecord]) -> Option<u32> {
        SimilarityStrategy::locate(self, pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(texts: &[&str]) -> Vec<PageRecord> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| PageRecord::new(i as u32 + 1, t.to_string()))
            .collect()
    }

    fn permissive() -> DetectionConfig {
        DetectionConfig {
            tail_fraction: 0.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_picks_most_gri_like_page() {
        let pages = doc(&[
            "Chairman letter on quarterly revenue",
            "GRI content index: GRI standards disclosure table with general disclosures",
            "Financial statements and auditor opinion",
        ]);
        let strategy = SimilarityStrategy::new(permissive());
        assert_eq!(strategy.locate(&pages), Some(2));
    }

    #[test]
    fn test_unrelated_pages_are_absent() {
        let pages = doc(&["Quarterly revenue grew", "Dividend policy unchanged"]);
        let strategy = SimilarityStrategy::new(permissive());
        assert_eq!(strategy.locate(&pages), None);
    }

    #[test]
    fn test_blank_pages_are_skipped_but_numbers_kept() {
        let pages = doc(&["", "   ", "GRI standards disclosure table"]);
        let strategy = SimilarityStrategy::new(permissive());
        let scores = strategy.score_pages(&pages).unwrap();
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].0, 3);
    }

    #[test]
    fn test_all_blank_is_absent() {
        let pages = doc(&["", " \n "]);
        assert_eq!(SimilarityStrategy::new(permissive()).locate(&pages), None);
    }

    #[test]
    fn test_threshold_is_strict() {
        assert_eq!(select_best(&[(4, 0.1)], 0.1), None);
        assert_eq!(select_best(&[(4, 0.1000001)], 0.1), Some(4));
        assert_eq!(select_best(&[(2, 0.3), (5, 0.3)], 0.1), Some(2));
        assert_eq!(select_best(&[], 0.1), None);
    }
}
