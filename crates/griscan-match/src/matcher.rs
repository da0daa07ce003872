//! Code matcher.
//!
//! Each catalog code is tested against the case-folded section text, first
//! by exact code forms and then, for longer descriptions, by a bag-of-words
//! check on the description's key words.

use std::collections::HashMap;

use griscan_core::{Catalog, DetectionConfig, Disclosure, PageRecord};
use regex::Regex;
use tracing::{debug, info, warn};

use crate::assemble::MatchMap;

/// Minimum description length (in words) before fuzzy matching is tried.
const FUZZY_MIN_WORDS: usize = 3;
/// Words longer than this count as key words.
const KEY_WORD_MIN_LEN: usize = 4;
const FUZZY_MIN_KEY_WORDS: usize = 2;

pub struct CodeMatcher {
    /// Catalog entries in order, each with its compiled exact-code pattern.
    entries: Vec<(&'static Disclosure, Regex)>,
    config: DetectionConfig,
}

impl CodeMatcher {
    pub fn new(catalog: Catalog, config: DetectionConfig) -> Self {
        let entries = catalog
            .iter()
            .map(|(_, disclosure)| (disclosure, code_pattern(disclosure.code)))
            .collect();
        Self { entries, config }
    }

    /// Lowercased text of pages `start_page..=start_page + section_window`,
    /// clamped to the document.
    pub fn section_text(&self, pages: &[PageRecord], start_page: u32) -> String {
        let start = (start_page.max(1) - 1) as usize;
        let end = pages.len().min(start + 1 + self.config.section_window);
        if start >= end {
            warn!("Section start page {} is beyond the document ({} pages)", start_page, pages.len());
            return String::new();
        }
        info!("Analyzing GRI section from page {} to {}", start_page, end);

        let mut buffer = String::new();
        for page in &pages[start..end] {
            buffer.push(' ');
            buffer.push_str(&page.text);
        }
        buffer.to_lowercase()
    }

    /// Verdict per catalog code for the section starting at `start_page`.
    ///
    /// Codes shared by several standards (the two GRI 306 revisions) are
    /// found when any of their entries matches.
    pub fn match_section(&self, pages: &[PageRecord], start_page: u32) -> MatchMap {
        let text = self.section_text(pages, start_page);

        let mut results: MatchMap = HashMap::new();
        for (disclosure, pattern) in &self.entries {
            let found = pattern.is_match(&text)
                || fuzzy_match(disclosure.description, &text, self.config.keyword_ratio);
            if found {
                debug!("Found GRI code {}", disclosure.code);
            }
            *results.entry(disclosure.code.to_string()).or_insert(false) |= found;
        }

        let found = results.values().filter(|f| **f).count();
        info!("Found {} out of {} GRI codes", found, results.len());
        results
    }

}

/// Exact-code forms for lowercase text: the code as a bounded token, "gri"
/// directly before the code, or the code followed by a separator.
fn code_pattern(code: &str) -> Regex {
    let code = regex::escape(&code.to_lowercase());
    Regex::new(&format!(r"\b{c}\b|gri\s*{c}\b|\b{c}[\s:.\-]", c = code))
        .expect("escaped code pattern")
}

fn fuzzy_match(description: &str, text: &str, keyword_ratio: f64) -> bool {
    let lower = description.to_lowercase();
    let words: Vec<&str> = lower.split_whitespace().collect();
    if words.len() < FUZZY_MIN_WORDS {
        return false;
    }

    let key_words: Vec<&str> = words
        .into_iter()
        .filter(|w| w.chars().count() > KEY_WORD_MIN_LEN)
        .collect();
    if key_words.len() < FUZZY_MIN_KEY_WORDS {
        return false;
    }

    let present = key_words.iter().filter(|w| text.contains(*w)).count();
    present as f64 >= key_words.len() as f64 * keyword_ratio
}

#[cfg(test)]
mod tests {
    use super::*;
    use griscan_core::GRI_CATALOG;

    fn matcher() -> CodeMatcher {
        CodeMatcher::new(GRI_CATALOG, DetectionConfig::default())
    }

    fn pages(texts: &[&str]) -> Vec<PageRecord> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| PageRecord::new(i as u32 + 1, t.to_string()))
            .collect()
    }

    #[test]
    fn test_bounded_code_is_found() {
        assert!(code_pattern("305-1").is_match("see disclosure 305-1 on scope 1"));
        assert!(code_pattern("305-1").is_match("gri305-1"));
        assert!(code_pattern("2-1").is_match("2-1: organizational details"));
    }

    #[test]
    fn test_code_inside_longer_token_is_not_found() {
        assert!(!code_pattern("305-1").is_match("reference 2305-1 only"));
        assert!(!code_pattern("305-1").is_match("item 2305-1: totals"));
    }

    #[test]
    fn test_one_pattern_per_catalog_entry() {
        let m = matcher();
        assert_eq!(m.entries.len(), GRI_CATALOG.len());
        for ((disclosure, pattern), (_, expected)) in m.entries.iter().zip(GRI_CATALOG.iter()) {
            assert_eq!(disclosure.code, expected.code);
            assert!(pattern.is_match(&format!("gri {}", expected.code)));
        }
    }

    #[test]
    fn test_two_word_description_never_fuzzy_matches() {
        assert!(!fuzzy_match("Waste generated", "waste generated waste generated", 0.7));
    }

    #[test]
    fn test_fuzzy_key_word_ratio() {
        // Key words: significant, indirect, economic, impacts
        let description = "Significant indirect economic impacts";
        assert!(fuzzy_match(description, "significant economic impacts were indirect", 0.7));
        assert!(fuzzy_match(description, "significant indirect economic", 0.7));
        assert!(!fuzzy_match(description, "significant economic", 0.7));
    }

    #[test]
    fn test_fuzzy_needs_two_key_words() {
        // "energy" is the only word longer than four characters.
        assert!(!fuzzy_match("Energy use in kind", "energy use in kind", 0.7));
    }

    #[test]
    fn test_section_window_is_clamped() {
        let m = matcher();
        let doc = pages(&["alpha", "beta", "gamma"]);
        assert_eq!(m.section_text(&doc, 2), " beta gamma");
        assert_eq!(m.section_text(&doc, 9), "");
    }

    #[test]
    fn test_section_window_length() {
        let m = matcher();
        let texts: Vec<String> = (1..=40).map(|i| format!("p{}", i)).collect();
        let doc: Vec<PageRecord> = texts
            .iter()
            .enumerate()
            .map(|(i, t)| PageRecord::new(i as u32 + 1, t.clone()))
            .collect();
        let text = m.section_text(&doc, 5);
        assert!(text.contains("p5 "));
        assert!(text.ends_with("p25"));
        assert!(!text.contains("p26"));
    }

    #[test]
    fn test_match_section_covers_every_code() {
        let m = matcher();
        let doc = pages(&["GRI Content Index", "2-1 Organizational details on page 4"]);
        let results = m.match_section(&doc, 1);
        assert!(results["2-1"]);
        assert!(!results["305-1"]);
        for (_, d) in GRI_CATALOG.iter() {
            assert!(results.contains_key(d.code));
        }
    }

    #[test]
    fn test_shared_306_code_has_one_verdict() {
        let m = matcher();
        let doc = pages(&["Reporting on 306-3 follows"]);
        let results = m.match_section(&doc, 1);
        assert!(results["306-3"]);
        assert!(!results["306-4"]);

        let distinct: std::collections::HashSet<&str> =
            GRI_CATALOG.iter().map(|(_, d)| d.code).collect();
        assert_eq!(results.len(), distinct.len());
    }
}
