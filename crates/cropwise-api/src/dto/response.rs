use cropwise_core::models::RecommendationMode;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self { status: "ok", service: "cropwise-api" }
    }
}

/// Result of clearing a cached recommendation
#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub mode: RecommendationMode,
    pub cleared: bool,
}
