//! Configuration, dataset and cache wiring shared by commands

use anyhow::{Context, Result};
use cropwise_core::config::{CliConfigOverrides, LayeredConfig};
use cropwise_core::CropDataset;
use cropwise_recommend::RecommendationEngine;
use cropwise_store::FileResultCache;
use std::path::Path;
use std::sync::Arc;

use crate::cli::Cli;
use crate::errors::dataset_load_failed;

/// Load layered configuration with CLI overrides
pub fn load_config(cli: &Cli) -> Result<LayeredConfig> {
    let mut config =
        LayeredConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    config.update_from_cli(CliConfigOverrides {
        dataset: cli.dataset.clone(),
        cache_dir: cli.cache_dir.clone(),
        fallback: cli.fallback,
    });

    Ok(config)
}

/// Load a dataset, turning failures into a user-facing error
pub fn load_dataset(path: &Path) -> Result<CropDataset> {
    CropDataset::from_path(path).map_err(|e| dataset_load_failed(path, &e).into())
}

pub fn build_engine(config: &LayeredConfig) -> Result<RecommendationEngine> {
    let dataset = load_dataset(&config.dataset.value)?;
    Ok(RecommendationEngine::new(Arc::new(dataset)).with_fallback_policy(config.fallback.value))
}

pub fn result_cache(config: &LayeredConfig) -> FileResultCache {
    FileResultCache::new(&config.cache_dir.value)
}
