//! griscan ingest — page text sources and text normalization.

pub mod normalize;
pub mod source;

pub use normalize::normalize;
pub use source::{load_pages, pages_from_raw, read_page_texts, SourceKind};
