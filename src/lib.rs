use std::any::Any;
use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

use config::Config;
use error::AppError;
use services::{EmotionClassifier, InsightsAggregator};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub classifier: Arc<EmotionClassifier>,
    pub insights: Arc<InsightsAggregator>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        Ok(Self {
            config: Arc::new(config),
            classifier: Arc::new(EmotionClassifier::new()?),
            insights: Arc::new(InsightsAggregator::new()),
        })
    }
}

pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/api/detect-emotion", post(handlers::emotion::detect_emotion))
        .route("/api/batch-detect", post(handlers::emotion::batch_detect))
        .route(
            "/api/personalized-insights",
            post(handlers::insights::personalized_insights),
        )
        .route("/api/mood-patterns", post(handlers::insights::mood_patterns))
        .route(
            "/api/productivity-insights",
            post(handlers::insights::productivity_insights),
        )
        .route(
            "/api/habit-recommendations",
            post(handlers::insights::habit_recommendations),
        );

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins(&state.config))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .merge(api_routes)
        .fallback(handlers::not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn allowed_origins(config: &Config) -> AllowOrigin {
    if config.cors_origins.iter().any(|o| o == "*") {
        return AllowOrigin::any();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(hv) => Some(hv),
            Err(_) => {
                tracing::warn!(origin = %o, "Skipping invalid CORS origin");
                None
            }
        })
        .collect();
    AllowOrigin::list(origins)
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    AppError::Internal(anyhow::anyhow!(details)).into_response()
}
