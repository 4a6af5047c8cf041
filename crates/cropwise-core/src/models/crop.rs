use serde::{Deserialize, Serialize};

use super::Interval;

/// Crop profile as it appears in the dataset document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crop {
    /// Display name; not enforced unique
    pub name: String,

    pub soil_type: String,

    pub climate: String,

    pub water_requirement: String,

    /// pH range in which the crop is viable
    #[serde(rename = "idealPH")]
    pub ideal_ph: Interval,

    /// Nitrogen target, the center of a tolerance band
    pub ideal_n: f64,

    /// Phosphorus target
    pub ideal_p: f64,

    /// Potassium target
    pub ideal_k: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_info: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_dataset_record() {
        let json = r#"{
            "name": "Wheat",
            "soilType": "Loamy",
            "climate": "Temperate",
            "waterRequirement": "Moderate",
            "idealPH": [6, 7.5],
            "idealN": 40,
            "idealP": 20,
            "idealK": 30,
            "season": "Rabi"
        }"#;

        let crop: Crop = serde_json::from_str(json).unwrap();
        assert_eq!(crop.name, "Wheat");
        assert_eq!(crop.ideal_ph, Interval::new(6.0, 7.5));
        assert_eq!(crop.ideal_n, 40.0);
        assert_eq!(crop.season.as_deref(), Some("Rabi"));
        assert!(crop.other_info.is_none());
    }

    #[test]
    fn test_optional_fields_are_omitted_on_output() {
        let crop = Crop {
            name: "Rice".to_string(),
            soil_type: "Clayey".to_string(),
            climate: "Tropical".to_string(),
            water_requirement: "High".to_string(),
            ideal_ph: Interval::new(5.5, 7.0),
            ideal_n: 80.0,
            ideal_p: 40.0,
            ideal_k: 40.0,
            season: None,
            other_info: None,
        };

        let value = serde_json::to_value(&crop).unwrap();
        assert_eq!(value["idealPH"], serde_json::json!([5.5, 7.0]));
        assert!(value.get("season").is_none());
        assert!(value.get("otherInfo").is_none());
    }

    #[test]
    fn test_missing_nutrient_is_rejected() {
        let json = r#"{
            "name": "Maize",
            "soilType": "Loamy",
            "climate": "Warm",
            "waterRequirement": "Moderate",
            "idealPH": [5.5, 7.5],
            "idealP": 30,
            "idealK": 30
        }"#;

        let err = serde_json::from_str::<Crop>(json).unwrap_err();
        assert!(err.to_string().contains("idealN"));
    }
}
