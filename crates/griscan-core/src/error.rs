//! Error types for griscan.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Source unavailable: {}", .0.display())]
    SourceUnavailable(PathBuf),

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Classifier error: {0}")]
    Classifier(String),

    #[error("Vectorizer error: {0}")]
    Vectorizer(String),
}

pub type Result<T> = std::result::Result<T, Error>;
