//! Coverage summaries over assembled records.

use std::collections::BTreeMap;
use std::time::Duration;

use griscan_core::DisclosureRecord;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExtractionSummary {
    pub total: usize,
    pub found: usize,
    /// Percentage of records found, 0.0 to 100.0.
    pub coverage: f64,
}

impl ExtractionSummary {
    pub fn from_records(records: &[DisclosureRecord]) -> Self {
        let total = records.len();
        let found = records.iter().filter(|r| r.status.is_found()).count();
        Self {
            total,
            found,
            coverage: percentage(found, total),
        }
    }

    pub fn quality(&self) -> QualityTier {
        QualityTier::from_coverage(self.coverage)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QualityTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl QualityTier {
    pub fn from_coverage(coverage: f64) -> Self {
        if coverage >= 90.0 {
            Self::Excellent
        } else if coverage >= 70.0 {
            Self::Good
        } else if coverage >= 50.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }
}

impl std::fmt::Display for QualityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandardCoverage {
    pub standard: String,
    pub found: usize,
    pub total: usize,
    pub coverage: f64,
}

/// Found/total per standard, in the order standards first appear.
pub fn standard_coverage(records: &[DisclosureRecord]) -> Vec<StandardCoverage> {
    let mut out: Vec<StandardCoverage> = Vec::new();
    for record in records {
        let entry = match out.iter_mut().position(|s| s.standard == record.standard) {
            Some(i) => &mut out[i],
            None => {
                out.push(StandardCoverage {
                    standard: record.standard.clone(),
                    found: 0,
                    total: 0,
                    coverage: 0.0,
                });
                let last = out.len() - 1;
                &mut out[last]
            }
        };
        entry.total += 1;
        if record.status.is_found() {
            entry.found += 1;
        }
    }
    for s in &mut out {
        s.coverage = percentage(s.found, s.total);
    }
    out
}

/// Found codes grouped by standard; standards and codes sorted.
pub fn found_by_standard(records: &[DisclosureRecord]) -> BTreeMap<String, Vec<String>> {
    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for record in records.iter().filter(|r| r.status.is_found()) {
        grouped
            .entry(record.standard.clone())
            .or_default()
            .push(record.code.clone());
    }
    for codes in grouped.values_mut() {
        codes.sort();
    }
    grouped
}

/// "12.3 seconds", "2.5 minutes" or "1.2 hours".
pub fn format_duration(elapsed: Duration) -> String {
    let secs = elapsed.as_secs_f64();
    if secs < 60.0 {
        format!("{:.1} seconds", secs)
    } else if secs < 3600.0 {
        format!("{:.1} minutes", secs / 60.0)
    } else {
        format!("{:.1} hours", secs / 3600.0)
    }
}

fn percentage(found: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        found as f64 / total as f64 * 100.0
    }
}
