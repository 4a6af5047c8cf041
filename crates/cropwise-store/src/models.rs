use chrono::{DateTime, Utc};
use cropwise_core::models::{Recommendation, RecommendationMode};
use serde::{Deserialize, Serialize};

/// A recommendation as stored by a [`crate::ResultCache`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedRecommendation {
    pub recommendation: Recommendation,
    pub saved_at: DateTime<Utc>,
    /// Version of the dataset that produced the result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset_version: Option<String>,
}

impl CachedRecommendation {
    /// Stamp a fresh result with the current time
    pub fn new(recommendation: Recommendation, dataset_version: Option<String>) -> Self {
        Self { recommendation, saved_at: Utc::now(), dataset_version }
    }

    pub fn mode(&self) -> RecommendationMode {
        self.recommendation.mode
    }

    /// Whether the entry came from the given dataset version.
    /// Unversioned entries only match unversioned datasets.
    pub fn is_current_for(&self, version: Option<&str>) -> bool {
        self.dataset_version.as_deref() == version
    }
}
