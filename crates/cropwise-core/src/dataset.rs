//! The crop dataset: zones and crop profiles, validated once at load.
//!
//! A [`CropDataset`] only exists if the whole document parsed and passed
//! validation, so a failed (re)load never leaves a half-populated value
//! behind. The dataset has no mutation API.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{DatasetError, DatasetIssue};
use crate::models::{Crop, Interval, Zone};

/// On-disk document shape
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DatasetDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    version: Option<String>,
    zones: Vec<Zone>,
}

/// Immutable, validated crop dataset
#[derive(Debug, Clone, PartialEq)]
pub struct CropDataset {
    version: Option<String>,
    zones: Vec<Zone>,
}

/// Counts reported by `validate`, `status` and the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSummary {
    pub version: Option<String>,
    pub zone_count: usize,
    /// Flattened catalog length, duplicates included
    pub crop_count: usize,
    /// Distinct names in first-appearance order
    pub distinct_crops: Vec<String>,
}

impl CropDataset {
    /// Build a dataset from in-memory zones, validating them
    pub fn new(zones: Vec<Zone>) -> Result<Self, DatasetError> {
        Self::from_document(DatasetDocument { version: None, zones })
    }

    /// Build a versioned dataset from in-memory zones
    pub fn with_version(zones: Vec<Zone>, version: impl Into<String>) -> Result<Self, DatasetError> {
        Self::from_document(DatasetDocument { version: Some(version.into()), zones })
    }

    /// Load and validate a JSON dataset document from disk
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|source| DatasetError::Read { path: path.to_path_buf(), source })?;

        let dataset = Self::from_json_str(&content)?;

        tracing::info!(
            path = %path.display(),
            version = dataset.version.as_deref().unwrap_or("unversioned"),
            zones = dataset.zones.len(),
            crops = dataset.catalog_len(),
            "Loaded crop dataset"
        );

        Ok(dataset)
    }

    /// Parse and validate a JSON dataset document
    pub fn from_json_str(content: &str) -> Result<Self, DatasetError> {
        let document: DatasetDocument = serde_json::from_str(content)
            .map_err(|e| DatasetError::Parse { reason: e.to_string() })?;
        Self::from_document(document)
    }

    fn from_document(document: DatasetDocument) -> Result<Self, DatasetError> {
        let issues = validate_zones(&document.zones);
        if !issues.is_empty() {
            return Err(DatasetError::Invalid { issues });
        }

        if document.zones.is_empty() {
            tracing::warn!("Crop dataset has no zones; every query will come back empty");
        }

        Ok(Self { version: document.version, zones: document.zones })
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Every zone's crops concatenated in zone order, duplicates preserved
    pub fn catalog(&self) -> impl Iterator<Item = &Crop> + '_ {
        self.zones.iter().flat_map(|zone| zone.recommended_crops.iter())
    }

    pub fn catalog_len(&self) -> usize {
        self.zones.iter().map(|zone| zone.recommended_crops.len()).sum()
    }

    pub fn summary(&self) -> DatasetSummary {
        let mut distinct_crops: Vec<String> = Vec::new();
        for crop in self.catalog() {
            if !distinct_crops.iter().any(|name| name == &crop.name) {
                distinct_crops.push(crop.name.clone());
            }
        }

        DatasetSummary {
            version: self.version.clone(),
            zone_count: self.zones.len(),
            crop_count: self.catalog_len(),
            distinct_crops,
        }
    }

    /// Serialize back to the JSON document format
    pub fn to_json_string(&self) -> Result<String, DatasetError> {
        let document = DatasetDocument { version: self.version.clone(), zones: self.zones.clone() };
        serde_json::to_string_pretty(&document)
            .map_err(|e| DatasetError::Parse { reason: e.to_string() })
    }
}

fn validate_zones(zones: &[Zone]) -> Vec<DatasetIssue> {
    let mut issues = Vec::new();

    for (zone_idx, zone) in zones.iter().enumerate() {
        let zone_path = format!("zones[{}]", zone_idx);
        check_interval(&mut issues, &format!("{}.latRange", zone_path), &zone.lat_range);
        check_interval(&mut issues, &format!("{}.lonRange", zone_path), &zone.lon_range);

        for (crop_idx, crop) in zone.recommended_crops.iter().enumerate() {
            let crop_path = format!("{}.recommendedCrops[{}]", zone_path, crop_idx);
            validate_crop(&mut issues, &crop_path, crop);
        }
    }

    issues
}

fn validate_crop(issues: &mut Vec<DatasetIssue>, crop_path: &str, crop: &Crop) {
    if crop.name.trim().is_empty() {
        issues.push(DatasetIssue::new(format!("{}.name", crop_path), "must not be empty"));
    }

    check_interval(issues, &format!("{}.idealPH", crop_path), &crop.ideal_ph);

    for (field, value) in [("idealN", crop.ideal_n), ("idealP", crop.ideal_p), ("idealK", crop.ideal_k)]
    {
        if !value.is_finite() {
            issues.push(DatasetIssue::new(
                format!("{}.{}", crop_path, field),
                "must be a finite number",
            ));
        } else if value <= 0.0 {
            issues.push(DatasetIssue::new(
                format!("{}.{}", crop_path, field),
                format!("must be positive, found {}", value),
            ));
        }
    }
}

fn check_interval(issues: &mut Vec<DatasetIssue>, location: &str, interval: &Interval) {
    if !interval.is_finite() {
        issues.push(DatasetIssue::new(location, "bounds must be finite numbers"));
    } else if !interval.is_ordered() {
        issues.push(DatasetIssue::new(
            location,
            format!("min {} is greater than max {}", interval.min, interval.max),
        ));
    }
}
