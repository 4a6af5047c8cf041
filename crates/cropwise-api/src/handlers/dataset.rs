use std::sync::Arc;

use axum::{extract::State, Json};
use cropwise_core::models::Crop;
use cropwise_core::DatasetSummary;

use crate::state::AppState;

/// GET /api/v1/dataset
pub async fn get_dataset_summary(State(state): State<Arc<AppState>>) -> Json<DatasetSummary> {
    Json(state.dataset().summary())
}

/// GET /api/v1/catalog - every zone's crops in dataset order
pub async fn get_catalog(State(state): State<Arc<AppState>>) -> Json<Vec<Crop>> {
    Json(state.dataset().catalog().cloned().collect())
}
