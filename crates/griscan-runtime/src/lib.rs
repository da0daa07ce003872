//! griscan runtime — the end-to-end extraction pipeline.
//!
//! Source pages are normalized, the GRI section is located, codes are matched
//! over the section window and every catalog code gets a record.

pub mod extractor;

pub use extractor::{Extraction, Extractor};
