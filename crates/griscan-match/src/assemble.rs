//! Result assembly.

use std::collections::HashMap;

use griscan_core::{Catalog, DisclosureRecord, DisclosureStatus};

/// Found verdict per disclosure code.
pub type MatchMap = HashMap<String, bool>;

/// One record per catalog code, in catalog order. Without a match map
/// (no section located) every record is not-found.
pub fn assemble(catalog: &Catalog, matches: Option<&MatchMap>) -> Vec<DisclosureRecord> {
    catalog
        .iter()
        .map(|(standard, disclosure)| {
            let found = matches
                .and_then(|m| m.get(disclosure.code))
                .copied()
                .unwrap_or(false);
            DisclosureRecord {
                standard: standard.name.to_string(),
                code: disclosure.code.to_string(),
                status: DisclosureStatus::from(found),
                description: disclosure.description.to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use griscan_core::GRI_CATALOG;

    #[test]
    fn test_one_record_per_code_in_order() {
        let mut matches = MatchMap::new();
        matches.insert("2-1".into(), true);
        matches.insert("not-a-code".into(), true);

        let records = assemble(&GRI_CATALOG, Some(&matches));
        assert_eq!(records.len(), GRI_CATALOG.len());
        for (record, (standard, disclosure)) in records.iter().zip(GRI_CATALOG.iter()) {
            assert_eq!(record.standard, standard.name);
            assert_eq!(record.code, disclosure.code);
        }
        assert_eq!(records[0].code, "2-1");
        assert_eq!(records[0].status, DisclosureStatus::Found);
        assert_eq!(records[0].standard, "GRI 2: General Disclosures 2021");
    }

    #[test]
    fn test_absent_map_is_all_not_found() {
        let records = assemble(&GRI_CATALOG, None);
        assert_eq!(records.len(), GRI_CATALOG.len());
        assert!(records.iter().all(|r| r.status == DisclosureStatus::NotFound));
    }

    #[test]
    fn test_shared_code_found_in_both_revisions() {
        let mut matches = MatchMap::new();
        matches.insert("306-3".into(), true);
        let records = assemble(&GRI_CATALOG, Some(&matches));
        let hits: Vec<&str> = records
            .iter()
            .filter(|r| r.code == "306-3" && r.status.is_found())
            .map(|r| r.description.as_str())
            .collect();
        assert_eq!(hits, vec!["Significant spills", "Waste generated"]);
    }
}
