use crate::error::{CropwiseError, Result};
use crate::models::FallbackPolicy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "cropwise.toml";

pub const DEFAULT_DATASET_PATH: &str = "data/crop_database.json";

pub const DEFAULT_CACHE_DIR: &str = ".cropwise/cache";

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for Cropwise
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub dataset: ConfigValue<PathBuf>,
    pub cache_dir: ConfigValue<PathBuf>,
    pub fallback: ConfigValue<FallbackPolicy>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            dataset: ConfigValue::new(PathBuf::from(DEFAULT_DATASET_PATH), ConfigSource::Default),
            cache_dir: ConfigValue::new(PathBuf::from(DEFAULT_CACHE_DIR), ConfigSource::Default),
            fallback: ConfigValue::new(FallbackPolicy::default(), ConfigSource::Default),
        }
    }

    /// Defaults, then the config file, then the environment.
    ///
    /// An explicit `config_path` must exist; without one, `cropwise.toml` in
    /// the working directory is read only if present.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config = Self::with_defaults();

        let config = match config_path {
            Some(path) => config.load_from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                config.load_from_file(DEFAULT_CONFIG_FILE)?
            }
            None => config,
        };

        Ok(config.load_from_env())
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| CropwiseError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| CropwiseError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(dataset) = file_config.dataset {
            self.dataset.update(dataset, ConfigSource::File);
        }

        if let Some(cache_dir) = file_config.cache_dir {
            self.cache_dir.update(cache_dir, ConfigSource::File);
        }

        if let Some(fallback) = file_config.fallback {
            self.fallback.update(fallback, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // CROPWISE_DATASET
        if let Ok(dataset) = env::var("CROPWISE_DATASET") {
            if dataset.trim().is_empty() {
                tracing::warn!("Ignoring empty CROPWISE_DATASET");
            } else {
                self.dataset.update(PathBuf::from(dataset), ConfigSource::Environment);
            }
        }

        // CROPWISE_CACHE_DIR
        if let Ok(cache_dir) = env::var("CROPWISE_CACHE_DIR") {
            if cache_dir.trim().is_empty() {
                tracing::warn!("Ignoring empty CROPWISE_CACHE_DIR");
            } else {
                self.cache_dir.update(PathBuf::from(cache_dir), ConfigSource::Environment);
            }
        }

        // CROPWISE_FALLBACK
        if let Ok(fallback_str) = env::var("CROPWISE_FALLBACK") {
            match parse_fallback_policy(&fallback_str) {
                Ok(fallback) => self.fallback.update(fallback, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid CROPWISE_FALLBACK value '{}': expected first-two or none",
                    fallback_str
                ),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(dataset) = overrides.dataset {
            self.dataset.update(dataset, ConfigSource::Cli);
        }

        if let Some(cache_dir) = overrides.cache_dir {
            self.cache_dir.update(cache_dir, ConfigSource::Cli);
        }

        if let Some(fallback) = overrides.fallback {
            self.fallback.update(fallback, ConfigSource::Cli);
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> BTreeMap<String, (String, ConfigSource)> {
        let mut map = BTreeMap::new();

        map.insert(
            "dataset".to_string(),
            (self.dataset.value.display().to_string(), self.dataset.source),
        );

        map.insert(
            "cache_dir".to_string(),
            (self.cache_dir.value.display().to_string(), self.cache_dir.source),
        );

        map.insert("fallback".to_string(), (self.fallback.value.to_string(), self.fallback.source));

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    dataset: Option<PathBuf>,
    cache_dir: Option<PathBuf>,
    fallback: Option<FallbackPolicy>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub dataset: Option<PathBuf>,
    pub cache_dir: Option<PathBuf>,
    pub fallback: Option<FallbackPolicy>,
}

/// Parse fallback policy from string
pub fn parse_fallback_policy(s: &str) -> Result<FallbackPolicy> {
    s.parse()
}
