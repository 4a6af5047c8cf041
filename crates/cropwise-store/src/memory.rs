//! In-memory result cache for the API server and tests.
//!
//! Uses `RwLock::unwrap()` intentionally. Lock poisoning only occurs when
//! another thread panicked while holding the lock, which is an unrecoverable
//! state. Use [`crate::FileResultCache`] when results must outlive the process.

use async_trait::async_trait;
use cropwise_core::error::Result;
use cropwise_core::models::RecommendationMode;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::models::CachedRecommendation;
use crate::ports::ResultCache;

/// In-memory implementation of ResultCache
#[derive(Debug, Clone, Default)]
pub struct MemoryResultCache {
    entries: Arc<RwLock<HashMap<RecommendationMode, CachedRecommendation>>>,
}

impl MemoryResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }
}

#[async_trait]
impl ResultCache for MemoryResultCache {
    async fn save(&self, entry: &CachedRecommendation) -> Result<()> {
        self.entries.write().unwrap().insert(entry.mode(), entry.clone());
        Ok(())
    }

    async fn load(&self, mode: RecommendationMode) -> Result<Option<CachedRecommendation>> {
        Ok(self.entries.read().unwrap().get(&mode).cloned())
    }

    async fn clear(&self, mode: RecommendationMode) -> Result<bool> {
        Ok(self.entries.write().unwrap().remove(&mode).is_some())
    }
}
