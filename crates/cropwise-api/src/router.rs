use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::state::AppState;

/// Create the API router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health_check))

        // Dataset
        .route("/api/v1/dataset", get(handlers::get_dataset_summary))
        .route("/api/v1/catalog", get(handlers::get_catalog))

        // Recommendations
        .route("/api/v1/recommend", post(handlers::handle_recommend))
        .route(
            "/api/v1/recommendations/{mode}",
            get(handlers::get_last_recommendation).delete(handlers::clear_last_recommendation),
        )

        // Irrigation
        .route("/api/v1/irrigation", post(handlers::handle_irrigation))

        .with_state(state)
}
