//! Real-Estate Price Dashboard Server
//!
//! Serves the dashboard page, the price prediction endpoint and the two
//! galleries of pre-rendered visualizations.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use anyhow::{Context, Result};
use inference_engine::{InferenceEngine, RegressionModel};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

pub mod config;
mod error;
mod routes;

pub use crate::config::AppConfig;
pub use error::{ApiError, ErrorBody};

use crate::config::{GalleryConfig, LoggingConfig};
use gallery::{Collection, Gallery};

/// Application state shared across handlers; immutable after startup
pub struct AppState {
    /// Price model, loaded once
    pub model: Arc<dyn RegressionModel>,
    pub heat_maps: Gallery,
    pub interpolations: Gallery,
    /// Prometheus renderer, when a recorder was installed
    pub metrics: Option<PrometheusHandle>,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create new application state
    pub fn new(
        model: Arc<dyn RegressionModel>,
        galleries: &GalleryConfig,
        metrics: Option<PrometheusHandle>,
    ) -> Self {
        Self {
            model,
            heat_maps: Gallery::new(Collection::HeatMaps, &galleries.maps_dir),
            interpolations: Gallery::new(Collection::Interpolations, &galleries.interpolation_dir),
            metrics,
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
        }
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub model_features: usize,
}

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::dashboard::index))
        .route("/metrics", get(metrics_handler))
        .route("/api/v1/health", get(health_handler))
        .route("/api/v1/categories", get(routes::categories::get_categories))
        .route("/api/v1/predictions", post(routes::predictions::create_prediction))
        .route("/api/v1/maps", get(routes::gallery::list_maps))
        .route("/api/v1/maps/:name", get(routes::gallery::get_map))
        .route("/api/v1/interpolations", get(routes::gallery::list_interpolations))
        .route("/api/v1/interpolations/:name", get(routes::gallery::get_interpolation))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        model_features: state.model.num_features(),
    })
}

/// Prometheus exposition
async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match &state.metrics {
        Some(handle) => (StatusCode::OK, handle.render()),
        None => (StatusCode::NOT_FOUND, "metrics disabled".to_string()),
    }
}

/// Initialize logging
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level: Level = config
        .level
        .parse()
        .with_context(|| format!("invalid log level {:?}", config.level))?;

    let builder = FmtSubscriber::builder().with_max_level(level).with_target(true);
    let installed = match config.format.as_str() {
        "json" => builder.json().try_init(),
        _ => builder.try_init(),
    };

    installed.map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))
}

/// Load the model, then bind and serve. A model that cannot be loaded stops
/// startup before the listener is bound.
pub async fn run_server(config: AppConfig) -> Result<()> {
    let engine = InferenceEngine::load(&config.model.path)
        .context("cannot serve predictions without the price model")?;

    let metrics = if config.server.metrics {
        PrometheusBuilder::new()
            .install_recorder()
            .map_err(|e| warn!("Metrics disabled: {}", e))
            .ok()
    } else {
        None
    };

    let state = Arc::new(AppState::new(Arc::new(engine), &config.gallery, metrics));
    let app = create_router(state);

    info!("Starting dashboard server on {}", config.server.addr);

    let listener = tokio::net::TcpListener::bind(&config.server.addr)
        .await
        .with_context(|| format!("cannot bind {}", config.server.addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
