//! Structural cleanup of raw per-page text.
//!
//! Not lossless: whitespace runs collapse, hyphenated line breaks are
//! rejoined and a line break is forced between a lowercase letter and a
//! directly following uppercase letter (merged text blocks).

use once_cell::sync::Lazy;
use regex::Regex;

// Any whitespace run that contains a line break.
static NEWLINE_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\n\s*").unwrap());
// Whitespace run without a line break.
static SPACE_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\S\n]+").unwrap());
static HYPHEN_BREAK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\w)-\n(\w)").unwrap());
static CASE_BOUNDARY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z])([A-Z])").unwrap());

/// Normalize raw extracted text. Empty input yields an empty string.
pub fn normalize(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }

    let text = raw.replace("\r\n", "\n").replace('\r', "\n");
    let text = NEWLINE_RUN_RE.replace_all(&text, "\n");
    let text = SPACE_RUN_RE.replace_all(&text, " ");
    let mut text = text.trim().to_string();

    // Chains like "a-\nb-\nc" share a character between matches.
    while HYPHEN_BREAK_RE.is_match(&text) {
        text = HYPHEN_BREAK_RE.replace_all(&text, "${1}${2}").into_owned();
    }

    CASE_BOUNDARY_RE.replace_all(&text, "${1}\n${2}").into_owned()
}
