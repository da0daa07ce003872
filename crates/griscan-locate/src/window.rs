//! Candidate page window shared by every strategy.

use griscan_core::{DetectionConfig, PageRecord};

/// The tail of the document that strategies are allowed to inspect.
///
/// Starts at zero-based index `floor(tail_fraction * len)`, so a 100-page
/// document with the default fraction yields pages 61..=100.
pub fn candidate_pages<'a>(pages: &'a [PageRecord], config: &DetectionConfig) -> &'a [PageRecord] {
    let start = config.tail_start(pages.len()).min(pages.len());
    &pages[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(n: u32) -> Vec<PageRecord> {
        (1..=n).map(|i| PageRecord::new(i, format!("page {}", i))).collect()
    }

    #[test]
    fn test_hundred_page_window() {
        let doc = pages(100);
        let window = candidate_pages(&doc, &DetectionConfig::default());
        assert_eq!(window.len(), 40);
        assert_eq!(window.first().unwrap().page_number, 61);
        assert_eq!(window.last().unwrap().page_number, 100);
    }

    #[test]
    fn test_small_documents() {
        let config = DetectionConfig::default();
        assert!(candidate_pages(&[], &config).is_empty());
        let single = pages(1);
        assert_eq!(candidate_pages(&single, &config).len(), 1);
    }
}
