//! Error types for Cropwise

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::models::CoordinateAxis;

/// The crop dataset could not be loaded or is structurally invalid.
///
/// Fatal to engine initialization: no query is served until a dataset
/// loads cleanly.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed dataset: {reason}")]
    Parse { reason: String },

    #[error("Invalid dataset ({} issue(s)): {}", .issues.len(), format_issues(.issues))]
    Invalid { issues: Vec<DatasetIssue> },
}

/// A single structural problem found while validating a dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetIssue {
    /// Path into the document, e.g. `zones[1].recommendedCrops[0].idealPH`
    pub location: String,
    pub reason: String,
}

impl DatasetIssue {
    pub fn new(location: impl Into<String>, reason: impl Into<String>) -> Self {
        Self { location: location.into(), reason: reason.into() }
    }
}

impl fmt::Display for DatasetIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.reason)
    }
}

fn format_issues(issues: &[DatasetIssue]) -> String {
    issues.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

/// A zone-mode query is missing a coordinate or carries a non-numeric one.
///
/// Recoverable: the caller should prompt for corrected input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidQueryError {
    #[error("Missing {axis}: enter both latitude and longitude")]
    MissingCoordinate { axis: CoordinateAxis },

    #[error("Invalid {axis} '{input}': expected a number")]
    NonNumericCoordinate { axis: CoordinateAxis, input: String },

    #[error("Invalid {axis}: must be a finite number")]
    NonFiniteCoordinate { axis: CoordinateAxis },
}

impl InvalidQueryError {
    /// The coordinate axis that failed validation
    pub fn axis(&self) -> CoordinateAxis {
        match self {
            InvalidQueryError::MissingCoordinate { axis }
            | InvalidQueryError::NonNumericCoordinate { axis, .. }
            | InvalidQueryError::NonFiniteCoordinate { axis } => *axis,
        }
    }
}

#[derive(Debug, Error)]
pub enum CropwiseError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    InvalidQuery(#[from] InvalidQueryError),

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // Cache errors
    #[error("Result cache error: {reason}")]
    Cache { reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, CropwiseError>;
