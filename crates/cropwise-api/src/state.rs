use cropwise_core::CropDataset;
use cropwise_recommend::RecommendationEngine;
use cropwise_store::ResultCache;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub engine: RecommendationEngine,
    pub cache: Arc<dyn ResultCache>,
}

impl AppState {
    pub fn new(engine: RecommendationEngine, cache: Arc<dyn ResultCache>) -> Self {
        Self { engine, cache }
    }

    pub fn dataset(&self) -> &CropDataset {
        self.engine.dataset()
    }
}
