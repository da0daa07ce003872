//! griscan core — disclosure catalog, detection configuration, shared types.

pub mod catalog;
pub mod config;
pub mod error;
pub mod types;

pub use catalog::{Catalog, Disclosure, Standard, GRI_CATALOG};
pub use config::DetectionConfig;
pub use error::{Error, Result};
pub use types::{DetectionMethod, DisclosureRecord, DisclosureStatus, PageRecord};
