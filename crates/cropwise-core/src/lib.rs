//! Cropwise Core - Domain models, crop dataset, and configuration
//!
//! This crate contains the crop/zone data model, the validated crop dataset
//! loader, the query parsing step, and the error taxonomy shared by every
//! other cropwise crate.

pub mod config;
pub mod dataset;
pub mod error;
pub mod models;

pub use dataset::{CropDataset, DatasetSummary};
pub use error::{CropwiseError, DatasetError, DatasetIssue, InvalidQueryError, Result};
