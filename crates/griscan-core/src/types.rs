//! Record types shared across the pipeline.

use serde::{Deserialize, Serialize};

/// Normalized text of one document page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    /// 1-indexed page number.
    pub page_number: u32,
    pub text: String,
    pub char_count: usize,
}

impl PageRecord {
    pub fn new(page_number: u32, text: String) -> Self {
        let char_count = text.chars().count();
        Self {
            page_number,
            text,
            char_count,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Detection outcome for a single disclosure code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisclosureStatus {
    Found,
    NotFound,
}

impl DisclosureStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Found => "found",
            Self::NotFound => "not-found",
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found)
    }
}

impl From<bool> for DisclosureStatus {
    fn from(found: bool) -> Self {
        if found {
            Self::Found
        } else {
            Self::NotFound
        }
    }
}

impl std::fmt::Display for DisclosureStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One output row: a catalog code and whether the document addresses it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisclosureRecord {
    #[serde(rename = "material_topic")]
    pub standard: String,
    #[serde(rename = "gri_code")]
    pub code: String,
    pub status: DisclosureStatus,
    pub description: String,
}

/// Which section-location strategy (or chain) to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionMethod {
    /// Pattern, then similarity, then classifier when configured.
    #[default]
    Auto,
    Pattern,
    Similarity,
    Classifier,
}

impl std::fmt::Display for DetectionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Pattern => write!(f, "pattern"),
            Self::Similarity => write!(f, "similarity"),
            Self::Classifier => write!(f, "classifier"),
        }
    }
}

impl std::str::FromStr for DetectionMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "pattern" => Ok(Self::Pattern),
            "similarity" | "tfidf" => Ok(Self::Similarity),
            "classifier" | "llm" => Ok(Self::Classifier),
            other => Err(format!(
                "unknown detection method '{}' (expected auto, pattern, similarity or classifier)",
                other
            )),
        }
    }
}
