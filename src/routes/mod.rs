//! HTTP routes
//!
//! HTML pages at the root, JSON resources under `/api`.

pub mod car_model_routes;
pub mod car_routes;
pub mod manufacturer_routes;
pub mod page_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use crate::state::AppState;

/// Build the complete application router
pub fn create_app(state: AppState) -> Router {
    let cors = if state.config.cors_origins.is_empty() {
        if state.config.is_production() {
            tracing::warn!("CORS_ORIGINS is not set; allowing requests from any origin");
        }
        cors_middleware()
    } else {
        cors_middleware_with_origins(state.config.cors_origins.clone())
    };

    Router::new()
        .route("/health", get(health))
        .merge(page_routes::create_page_router())
        .nest("/api/manufacturer", manufacturer_routes::create_manufacturer_router())
        .nest("/api/model", car_model_routes::create_car_model_router())
        .nest("/api/car", car_routes::create_car_router())
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "car_catalog",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
