//! griscan match — disclosure verdicts for a located section, plus the
//! record assembly, coverage summaries and export that sit on top of them.

pub mod assemble;
pub mod export;
pub mod matcher;
pub mod summary;

pub use assemble::{assemble, MatchMap};
pub use export::{write_csv, write_csv_to, write_json, CsvLayout, DisclosureReport};
pub use matcher::CodeMatcher;
pub use summary::{
    format_duration, found_by_standard, standard_coverage, ExtractionSummary, QualityTier,
    StandardCoverage,
};
