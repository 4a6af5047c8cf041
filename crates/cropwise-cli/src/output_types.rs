use cropwise_core::config::ConfigSource;
use cropwise_core::models::Crop;
use cropwise_core::{DatasetIssue, DatasetSummary};
use serde::Serialize;
use tabled::Tabled;

/// One crop in a recommendation table
#[derive(Debug, Serialize, Tabled)]
pub struct CropRow {
    #[tabled(rename = "Crop")]
    pub name: String,
    #[tabled(rename = "Soil")]
    pub soil_type: String,
    #[tabled(rename = "Climate")]
    pub climate: String,
    #[tabled(rename = "Water")]
    pub water_requirement: String,
    #[tabled(rename = "Season")]
    pub season: String,
}

impl From<&Crop> for CropRow {
    fn from(crop: &Crop) -> Self {
        Self {
            name: crop.name.clone(),
            soil_type: crop.soil_type.clone(),
            climate: crop.climate.clone(),
            water_requirement: crop.water_requirement.clone(),
            season: crop.season.clone().unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// One catalog entry with its ideal soil profile
#[derive(Debug, Serialize, Tabled)]
pub struct CatalogRow {
    #[tabled(rename = "Zone")]
    pub zone: usize,
    #[tabled(rename = "Crop")]
    pub name: String,
    #[tabled(rename = "pH")]
    pub ph: String,
    #[tabled(rename = "N")]
    pub n: f64,
    #[tabled(rename = "P")]
    pub p: f64,
    #[tabled(rename = "K")]
    pub k: f64,
}

/// Effective configuration value
#[derive(Debug, Serialize, Tabled)]
pub struct ConfigRow {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Source")]
    #[tabled(display_with = "display_source")]
    pub source: ConfigSource,
}

fn display_source(source: &ConfigSource) -> String {
    format!("{:?}", source)
}

/// Output for validate command
#[derive(Debug, Serialize)]
pub struct ValidateOutput {
    pub path: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<DatasetSummary>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<DatasetIssue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Output for `last --clear`
#[derive(Debug, Serialize)]
pub struct ClearOutput {
    pub mode: String,
    pub cleared: bool,
}
