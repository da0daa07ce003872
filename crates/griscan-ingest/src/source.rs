//! Per-page text sources.
//!
//! A page that fails to extract yields empty text; only a document that
//! cannot be opened at all is an error.

use std::path::Path;

use griscan_core::{Error, PageRecord, Result};
use lopdf::Document;
use tracing::{debug, info, warn};

use crate::normalize::normalize;

/// Page separator for plain-text sources.
pub const FORM_FEED: char = '\x0c';

/// Supported document kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Pdf,
    /// Plain text with pages separated by form feed.
    Text,
}

impl SourceKind {
    /// Detect source kind from extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "txt" | "text" => Some(Self::Text),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

/// Read raw (un-normalized) page texts in document order.
pub fn read_page_texts(path: &Path) -> Result<Vec<String>> {
    if !path.is_file() {
        return Err(Error::SourceUnavailable(path.to_path_buf()));
    }

    match SourceKind::from_path(path) {
        Some(SourceKind::Pdf) => read_pdf_pages(path),
        Some(SourceKind::Text) => read_text_pages(path),
        None => {
            warn!("Unsupported document type: {}", path.display());
            Err(Error::SourceUnavailable(path.to_path_buf()))
        }
    }
}

/// Read and normalize every page of a document.
pub fn load_pages(path: &Path) -> Result<Vec<PageRecord>> {
    let raw = read_page_texts(path)?;
    Ok(pages_from_raw(raw))
}

/// Build 1-indexed page records from raw page texts.
pub fn pages_from_raw<I, S>(raw: I) -> Vec<PageRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .enumerate()
        .map(|(i, text)| PageRecord::new(i as u32 + 1, normalize(text.as_ref())))
        .collect()
}

fn read_pdf_pages(path: &Path) -> Result<Vec<String>> {
    let doc = Document::load(path)
        .map_err(|e| Error::Pdf(format!("failed to read {}: {}", path.display(), e)))?;

    let pages = doc.get_pages();
    info!("Processing PDF with {} pages", pages.len());

    let mut texts = Vec::with_capacity(pages.len());
    for &page_num in pages.keys() {
        match doc.extract_text(&[page_num]) {
            Ok(text) => texts.push(text),
            Err(e) => {
                warn!("Failed to extract text from page {}: {}", page_num, e);
                texts.push(String::new());
            }
        }
    }

    Ok(texts)
}

fn read_text_pages(path: &Path) -> Result<Vec<String>> {
    let bytes = std::fs::read(path)?;
    // Invalid UTF-8 degrades to replacement characters, not a failed document.
    let content = String::from_utf8_lossy(&bytes);
    let mut pages: Vec<String> = content.split(FORM_FEED).map(str::to_string).collect();

    // A trailing separator terminates the last page rather than opening a new one.
    if content.ends_with(FORM_FEED) {
        pages.pop();
    }

    debug!("Read {} text pages from {}", pages.len(), path.display());
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    /// One content stream per page; `None` writes an undecodable stream.
    fn write_pdf(path: &Path, pages: &[Option<&str>]) {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids = Vec::new();
        for text in pages {
            let stream = match text {
                Some(text) => {
                    let content = Content {
                        operations: vec![
                            Operation::new("BT", vec![]),
                            Operation::new("Tf", vec![Object::Name(b"F1".to_vec()), Object::Integer(12)]),
                            Operation::new("Td", vec![Object::Integer(72), Object::Integer(720)]),
                            Operation::new("Tj", vec![Object::string_literal(*text)]),
                            Operation::new("ET", vec![]),
                        ],
                    };
                    Stream::new(dictionary! {}, content.encode().unwrap())
                }
                None => Stream::new(
                    dictionary! { "Filter" => "FlateDecode" },
                    b"\x00\x01\x02 not deflate data".to_vec(),
                ),
            };
            let content_id = doc.add_object(stream);
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(Object::Reference(page_id));
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.save(path).unwrap();
    }

    #[test]
    fn test_pdf_pages_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.pdf");
        write_pdf(
            &path,
            &[
                Some("cover   page"),
                Some("GRI Content Index 2-1 Organizational details"),
                Some("end"),
            ],
        );

        let pages = load_pages(&path).unwrap();
        let numbers: Vec<u32> = pages.iter().map(|p| p.page_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(pages[0].text.trim(), "cover page");
        assert_eq!(pages[1].text.trim(), "GRI Content Index 2-1 Organizational details");
        assert_eq!(pages[2].text.trim(), "end");
    }

    #[test]
    fn test_unreadable_pdf_page_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.pdf");
        write_pdf(&path, &[Some("first"), None, Some("GRI Content Index")]);

        let pages = load_pages(&path).unwrap();
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].text.trim(), "first");
        assert_eq!(pages[1].text, "");
        assert!(pages[1].is_blank());
        assert_eq!(pages[2].text.trim(), "GRI Content Index");
    }

    #[test]
    fn test_invalid_utf8_text_degrades() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        std::fs::write(&path, b"cover \xff page\x0cGRI Content Index").unwrap();

        let pages = load_pages(&path).unwrap();
        assert_eq!(pages.len(), 2);
        assert!(pages[0].text.contains('\u{FFFD}'));
        assert_eq!(pages[1].text, "GRI Content Index");
    }

    #[test]
    fn test_missing_source_is_unavailable() {
        let err = read_page_texts(Path::new("/nonexistent/report.pdf")).unwrap_err();
        assert!(matches!(err, Error::SourceUnavailable(_)));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.docx");
        std::fs::write(&path, "not a pdf").unwrap();
        assert!(matches!(
            read_page_texts(&path),
            Err(Error::SourceUnavailable(_))
        ));
    }

    #[test]
    fn test_text_pages_split_on_form_feed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        std::fs::write(&path, "cover\x0c\x0cGRI  content index\x0c").unwrap();

        let pages = load_pages(&path).unwrap();
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].page_number, 1);
        assert!(pages[1].is_blank());
        assert_eq!(pages[2].text, "GRI content index");
        assert_eq!(pages[2].char_count, 17);
    }

    #[test]
    fn test_corrupt_pdf_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        std::fs::write(&path, b"%PDF-1.4 garbage").unwrap();
        assert!(matches!(read_page_texts(&path), Err(Error::Pdf(_))));
    }

    #[test]
    fn test_source_kind_detection() {
        assert_eq!(SourceKind::from_extension("PDF"), Some(SourceKind::Pdf));
        assert_eq!(SourceKind::from_extension("txt"), Some(SourceKind::Text));
        assert_eq!(SourceKind::from_extension("md"), None);
    }
}
