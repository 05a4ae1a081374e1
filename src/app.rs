use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::agents::groq::GroqCompletion;
use crate::agents::{CompletionService, ModelCatalog, ModelProfile, PlannerPipeline, Tutor};
use crate::config::{Config, DEFAULT_LOG_FILTER};
use crate::routes::create_routes;

/// Initialize tracing and logging for the application
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Shared, immutable handler state built once at startup
#[derive(Clone)]
pub struct AppState {
    pub planner: PlannerPipeline,
    pub tutor: Tutor,
}

impl AppState {
    pub fn new(service: Arc<dyn CompletionService>, models: &ModelCatalog) -> Self {
        Self {
            planner: PlannerPipeline::new(
                service.clone(),
                ModelProfile::classifier(models.fast.clone()),
                ModelProfile::planner(models.planner.clone()),
            ),
            tutor: Tutor::new(service, ModelProfile::tutor(models.fast.clone())),
        }
    }

    /// State backed by the live Groq provider
    pub fn from_config(config: &Config) -> Self {
        info!(
            "Using Groq models fast={} planner={}",
            config.fast_model, config.planner_model
        );
        let service = Arc::new(GroqCompletion::new(&config.groq_api_key));
        Self::new(service, &config.models())
    }
}

/// Create and configure the Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    info!("Initializing application router");

    Router::new()
        .merge(create_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
