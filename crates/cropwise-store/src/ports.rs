use async_trait::async_trait;
use cropwise_core::error::Result;
use cropwise_core::models::RecommendationMode;

use crate::models::CachedRecommendation;

/// Port for keeping the most recent recommendation per mode
#[async_trait]
pub trait ResultCache: Send + Sync {
    /// Store a result, replacing whatever was cached for its mode
    async fn save(&self, entry: &CachedRecommendation) -> Result<()>;

    /// Most recent result for a mode, if any
    async fn load(&self, mode: RecommendationMode) -> Result<Option<CachedRecommendation>>;

    /// Remove the cached result for a mode.
    /// Returns whether anything was removed.
    async fn clear(&self, mode: RecommendationMode) -> Result<bool>;
}
