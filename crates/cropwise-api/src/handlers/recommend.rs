use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use cropwise_core::models::{Recommendation, RecommendationMode, RecommendationQuery};
use cropwise_store::CachedRecommendation;

use crate::dto::ClearResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/v1/recommend
///
/// The result is cached per mode after it is computed. A failed save is
/// logged and does not fail the request.
pub async fn handle_recommend(
    State(state): State<Arc<AppState>>,
    Json(query): Json<RecommendationQuery>,
) -> Result<Json<Recommendation>, ApiError> {
    let recommendation = state.engine.recommend(&query).map_err(|e| {
        tracing::info!(error = %e, "Rejected recommendation query");
        ApiError::from(e)
    })?;

    tracing::info!(
        mode = %recommendation.mode,
        crops = recommendation.crops.len(),
        used_fallback = recommendation.used_fallback,
        "Served recommendation"
    );

    let entry = CachedRecommendation::new(
        recommendation.clone(),
        state.dataset().version().map(str::to_string),
    );
    if let Err(e) = state.cache.save(&entry).await {
        tracing::warn!(error = %e, "Failed to cache recommendation");
    }

    Ok(Json(recommendation))
}

/// GET /api/v1/recommendations/{mode}
pub async fn get_last_recommendation(
    State(state): State<Arc<AppState>>,
    Path(mode): Path<String>,
) -> Result<Json<CachedRecommendation>, ApiError> {
    let mode: RecommendationMode = mode.parse()?;

    let entry = state.cache.load(mode).await?.ok_or_else(|| {
        ApiError::not_found("No cached recommendation")
            .with_details(format!("No {} recommendation has been made yet", mode))
    })?;

    if !entry.is_current_for(state.dataset().version()) {
        tracing::debug!(mode = %mode, "Cached recommendation predates the loaded dataset");
    }

    Ok(Json(entry))
}

/// DELETE /api/v1/recommendations/{mode}
pub async fn clear_last_recommendation(
    State(state): State<Arc<AppState>>,
    Path(mode): Path<String>,
) -> Result<Json<ClearResponse>, ApiError> {
    let mode: RecommendationMode = mode.parse()?;
    let cleared = state.cache.clear(mode).await?;
    Ok(Json(ClearResponse { mode, cleared }))
}
