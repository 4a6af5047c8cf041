//! Integration tests for crop dataset loading
//!
//! These tests verify that loading is all-or-nothing: a document either
//! yields a fully validated dataset or a `DatasetError`.

use cropwise_core::{CropDataset, DatasetError};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn bundled_dataset_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/crop_database.json")
}

fn write_dataset(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[test]
fn test_bundled_dataset_loads() {
    let dataset = CropDataset::from_path(bundled_dataset_path()).unwrap();

    assert_eq!(dataset.version(), Some("2024.1"));
    assert_eq!(dataset.zones().len(), 5);
    assert_eq!(dataset.catalog_len(), 16);

    let first_two: Vec<&str> = dataset.catalog().take(2).map(|c| c.name.as_str()).collect();
    assert_eq!(first_two, vec!["Rice", "Cotton"]);
}

#[test]
fn test_load_from_file() {
    let file = write_dataset(
        r#"{
  "zones": [
    {
      "latRange": [8, 20],
      "lonRange": [70, 80],
      "recommendedCrops": [
        {
          "name": "Rice",
          "soilType": "Clayey",
          "climate": "Tropical",
          "waterRequirement": "High",
          "idealPH": [5.5, 7.0],
          "idealN": 80,
          "idealP": 40,
          "idealK": 40,
          "otherInfo": "Paddy"
        }
      ]
    }
  ]
}"#,
    );

    let dataset = CropDataset::from_path(file.path()).unwrap();
    assert_eq!(dataset.version(), None);
    assert_eq!(dataset.zones()[0].recommended_crops[0].other_info.as_deref(), Some("Paddy"));
}

#[test]
fn test_missing_file_is_a_read_error() {
    let err = CropDataset::from_path("/nonexistent/cropwise/zones.json").unwrap_err();
    match err {
        DatasetError::Read { path, .. } => {
            assert_eq!(path, PathBuf::from("/nonexistent/cropwise/zones.json"))
        }
        other => panic!("expected read error, got {:?}", other),
    }
}

#[test]
fn test_missing_required_field_is_a_parse_error() {
    let file = write_dataset(
        r#"{"zones": [{"latRange": [8, 20], "recommendedCrops": []}]}"#,
    );

    let err = CropDataset::from_path(file.path()).unwrap_err();
    let DatasetError::Parse { reason } = err else {
        panic!("expected parse error");
    };
    assert!(reason.contains("lonRange"), "reason was: {}", reason);
}

#[test]
fn test_truncated_document_is_a_parse_error() {
    let file = write_dataset(r#"{"zones": [{"latRange": [8, 20],"#);
    assert!(matches!(CropDataset::from_path(file.path()), Err(DatasetError::Parse { .. })));
}

#[test]
fn test_every_validation_issue_is_reported() {
    let file = write_dataset(
        r#"{
  "zones": [
    {
      "latRange": [20, 8],
      "lonRange": [70, 80],
      "recommendedCrops": [
        {
          "name": "Wheat",
          "soilType": "Loamy",
          "climate": "Cool",
          "waterRequirement": "Moderate",
          "idealPH": [7.5, 6.0],
          "idealN": -40,
          "idealP": 20,
          "idealK": 30
        }
      ]
    },
    {
      "latRange": [0, 5],
      "lonRange": [90, 85],
      "recommendedCrops": []
    }
  ]
}"#,
    );

    let err = CropDataset::from_path(file.path()).unwrap_err();
    let DatasetError::Invalid { issues } = err else {
        panic!("expected validation error");
    };

    let locations: Vec<&str> = issues.iter().map(|i| i.location.as_str()).collect();
    assert_eq!(
        locations,
        vec![
            "zones[0].latRange",
            "zones[0].recommendedCrops[0].idealPH",
            "zones[0].recommendedCrops[0].idealN",
            "zones[1].lonRange",
        ]
    );
}

#[test]
fn test_empty_zone_list_is_valid() {
    let dataset = CropDataset::from_json_str(r#"{"zones": []}"#).unwrap();
    assert_eq!(dataset.catalog_len(), 0);
    assert!(dataset.summary().distinct_crops.is_empty());
}
