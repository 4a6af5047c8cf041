use serde::Deserialize;

/// Irrigation advice request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IrrigationRequest {
    pub soil_moisture: f64,
    #[serde(default)]
    pub temperature: Option<f64>,
}
