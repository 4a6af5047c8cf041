use axum::Json;
use cropwise_recommend::{advise, IrrigationAdvice};

use crate::dto::IrrigationRequest;
use crate::error::ApiError;

/// POST /api/v1/irrigation
pub async fn handle_irrigation(
    Json(request): Json<IrrigationRequest>,
) -> Result<Json<IrrigationAdvice>, ApiError> {
    if !request.soil_moisture.is_finite() || !(0.0..=100.0).contains(&request.soil_moisture) {
        return Err(ApiError::bad_request("Invalid soil moisture")
            .with_details(format!("Expected a percentage, got {}", request.soil_moisture)));
    }

    Ok(Json(advise(request.soil_moisture, request.temperature)))
}
