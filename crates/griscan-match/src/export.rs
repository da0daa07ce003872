//! JSON and CSV export of disclosure records.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use griscan_core::{DisclosureRecord, Error, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Top-level JSON document: `{"gri_disclosures": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisclosureReport {
    pub gri_disclosures: Vec<DisclosureRecord>,
}

impl DisclosureReport {
    pub fn new(records: Vec<DisclosureRecord>) -> Self {
        Self {
            gri_disclosures: records,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CsvLayout {
    /// material_topic, gri_code, status, description
    #[default]
    Full,
    /// material_topic, gri_code, status
    Compact,
}

pub fn write_json(records: &[DisclosureRecord], path: &Path) -> Result<()> {
    let report = DisclosureReport::new(records.to_vec());
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, &report)?;
    writer.flush()?;
    info!("Results saved to {}", path.display());
    Ok(())
}

pub fn write_csv(records: &[DisclosureRecord], path: &Path, layout: CsvLayout) -> Result<()> {
    let file = File::create(path)?;
    write_csv_to(records, file, layout)?;
    info!("CSV saved to {}", path.display());
    Ok(())
}

/// CSV rows for `records` written to any sink.
pub fn write_csv_to<W: Write>(records: &[DisclosureRecord], sink: W, layout: CsvLayout) -> Result<()> {
    let mut writer = csv::Writer::from_writer(sink);

    let mut header = vec!["material_topic", "gri_code", "status"];
    if layout == CsvLayout::Full {
        header.push("description");
    }
    writer.write_record(&header).map_err(csv_err)?;

    for r in records {
        let mut row = vec![r.standard.as_str(), r.code.as_str(), r.status.as_str()];
        if layout == CsvLayout::Full {
            row.push(r.description.as_str());
        }
        writer.write_record(&row).map_err(csv_err)?;
    }

    writer.flush()?;
    Ok(())
}

fn csv_err(e: csv::Error) -> Error {
    Error::Csv(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use griscan_core::DisclosureStatus;

    fn records() -> Vec<DisclosureRecord> {
        vec![
            DisclosureRecord {
                standard: "GRI 2: General Disclosures 2021".into(),
                code: "2-1".into(),
                status: DisclosureStatus::Found,
                description: "Organizational details".into(),
            },
            DisclosureRecord {
                standard: "GRI 305: Emissions 2016".into(),
                code: "305-7".into(),
                status: DisclosureStatus::NotFound,
                description: "Nitrogen oxides (NOX), sulfur oxides (SOX), and other significant air emissions"
                    .into(),
            },
        ]
    }

    #[test]
    fn test_json_document_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_json(&records(), &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let rows = value["gri_disclosures"].as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["material_topic"], "GRI 2: General Disclosures 2021");
        assert_eq!(rows[1]["status"], "not-found");
    }

    #[test]
    fn test_full_csv_quotes_commas() {
        let mut buf = Vec::new();
        write_csv_to(&records(), &mut buf, CsvLayout::Full).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "material_topic,gri_code,status,description");
        assert_eq!(lines[1], "GRI 2: General Disclosures 2021,2-1,found,Organizational details");
        assert!(lines[2].ends_with(
            "\"Nitrogen oxides (NOX), sulfur oxides (SOX), and other significant air emissions\""
        ));
    }

    #[test]
    fn test_compact_csv_drops_description() {
        let mut buf = Vec::new();
        write_csv_to(&records(), &mut buf, CsvLayout::Compact).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().next(), Some("material_topic,gri_code,status"));
        assert_eq!(text.lines().nth(2), Some("GRI 305: Emissions 2016,305-7,not-found"));
    }
}
