//! JSON-file result cache: one `<mode>.json` document per mode.

use async_trait::async_trait;
use cropwise_core::error::{CropwiseError, Result};
use cropwise_core::models::RecommendationMode;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::models::CachedRecommendation;
use crate::ports::ResultCache;

/// File-backed implementation of ResultCache
#[derive(Debug, Clone)]
pub struct FileResultCache {
    dir: PathBuf,
}

impl FileResultCache {
    /// The directory is created on first save
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, mode: RecommendationMode) -> PathBuf {
        self.dir.join(format!("{}.json", mode.as_str()))
    }
}

#[async_trait]
impl ResultCache for FileResultCache {
    async fn save(&self, entry: &CachedRecommendation) -> Result<()> {
        fs::create_dir_all(&self.dir).await?;

        let path = self.path_for(entry.mode());
        let temp_path = path.with_extension("json.tmp");

        let json = serde_json::to_vec_pretty(entry)
            .map_err(|e| CropwiseError::Serialization(e.to_string()))?;

        // Write then rename so readers never see a partial document
        fs::write(&temp_path, &json).await?;
        fs::rename(&temp_path, &path).await?;

        tracing::debug!(mode = %entry.mode(), path = %path.display(), "Saved recommendation");
        Ok(())
    }

    async fn load(&self, mode: RecommendationMode) -> Result<Option<CachedRecommendation>> {
        let path = self.path_for(mode);

        let content = match fs::read(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let entry = serde_json::from_slice(&content).map_err(|e| CropwiseError::Cache {
            reason: format!("Corrupt cache file {}: {}", path.display(), e),
        })?;

        Ok(Some(entry))
    }

    async fn clear(&self, mode: RecommendationMode) -> Result<bool> {
        let path = self.path_for(mode);

        match fs::remove_file(&path).await {
            Ok(()) => {
                tracing::debug!(mode = %mode, path = %path.display(), "Cleared recommendation");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
