use std::sync::Arc;

use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use cropwise_core::CropDataset;
use cropwise_recommend::RecommendationEngine;
use cropwise_store::{FileResultCache, MemoryResultCache, ResultCache};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cropwise_api::{create_router, ApiConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cropwise_api=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env().context("Failed to load configuration")?;

    tracing::info!(
        port = config.port,
        dataset = %config.dataset.display(),
        fallback = %config.fallback,
        "Starting Cropwise API server"
    );

    // The dataset must load before any query is served
    let dataset = CropDataset::from_path(&config.dataset)
        .with_context(|| format!("Failed to load crop dataset from {}", config.dataset.display()))?;

    let engine =
        RecommendationEngine::new(Arc::new(dataset)).with_fallback_policy(config.fallback);

    let cache: Arc<dyn ResultCache> = match &config.cache_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "Caching results on disk");
            Arc::new(FileResultCache::new(dir))
        }
        None => {
            tracing::info!("Caching results in memory (set CROPWISE_CACHE_DIR to persist)");
            Arc::new(MemoryResultCache::new())
        }
    };

    let state = Arc::new(AppState::new(engine, cache));

    let origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin: {}", config.cors_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let app = create_router(state).layer(TraceLayer::new_for_http()).layer(cors);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("CORS enabled for {}", config.cors_origin);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
