//! griscan locate — finds the page where a report's GRI index begins.
//!
//! Three strategies share one contract (`pages -> Option<page>`) and run as
//! an ordered fallback chain: pattern, then TF-IDF similarity, then the
//! optional LLM classifier.

pub mod chain;
pub mod classifier;
pub mod pattern;
pub mod similarity;
pub mod tfidf;
pub mod window;

pub use chain::{SectionHit, SectionLocator, SectionStrategy, StrategyKind};
pub use classifier::{ClassifierStrategy, CompletionEndpoint};
pub use pattern::PatternStrategy;
pub use similarity::SimilarityStrategy;
pub use tfidf::TfidfVectorizer;
pub use window::candidate_pages;
