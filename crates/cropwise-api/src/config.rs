use cropwise_core::config::{ConfigSource, LayeredConfig};
use cropwise_core::error::Result;
use cropwise_core::models::FallbackPolicy;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,
    pub cors_origin: String,
    pub dataset: PathBuf,
    pub fallback: FallbackPolicy,
    /// Directory for the file-backed result cache; results stay in memory
    /// unless a cache directory was configured explicitly
    pub cache_dir: Option<PathBuf>,
}

impl ApiConfig {
    /// Server settings from the environment, engine settings from the
    /// layered configuration (`cropwise.toml` plus `CROPWISE_*` variables)
    pub fn from_env() -> Result<Self> {
        let layered = LayeredConfig::load(None)?;
        Ok(Self::from_layered(layered))
    }

    pub fn from_layered(layered: LayeredConfig) -> Self {
        let port = env::var("CROPWISE_PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(DEFAULT_PORT);

        let cors_origin =
            env::var("CROPWISE_CORS_ORIGIN").unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string());

        let cache_dir = match layered.cache_dir.source {
            ConfigSource::Default => None,
            _ => Some(layered.cache_dir.value),
        };

        Self {
            port,
            cors_origin,
            dataset: layered.dataset.value,
            fallback: layered.fallback.value,
            cache_dir,
        }
    }

    /// Get the server bind address
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    pub fn uses_file_cache(&self) -> bool {
        self.cache_dir.is_some()
    }
}
