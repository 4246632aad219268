//! HTTP/JSON service.
//!
//! This module provides:
//! - The axum router with the three `/api` routes (`router`)
//! - Handlers and the `{"detail": ...}` error mapping (`routes`)
//! - Configuration types (`config`)
//!
//! CORS is fully permissive: any origin, method, and header, with
//! credentials. Since wildcards are not allowed alongside credentials, the
//! request's own origin, method, and headers are mirrored back.

pub mod config;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::model::{HuggingFaceLoader, ModelManager};
use crate::pipeline::Summarizer;
use crate::providers::HuggingFaceClient;

pub use config::{Config, Secrets};
pub use routes::AppState;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/summarize", post(routes::summarize))
        .route("/api/health", get(routes::health))
        .route("/api/emotions", get(routes::emotions))
        .with_state(state)
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
}

/// Build handler state backed by the HuggingFace Inference API.
///
/// No model is contacted here; handles are created on the first summarize.
pub fn build_state(config: &Config, secrets: &Secrets) -> AppState {
    let client = HuggingFaceClient::with_options(
        secrets.huggingface_api_key(),
        &config.huggingface.base_url,
        config.huggingface.timeout(),
    );
    let models = ModelManager::new(
        Arc::new(HuggingFaceLoader::new(client)),
        config.models.clone().into(),
    );
    AppState::new(Summarizer::new(Arc::new(models)))
}

/// Serve the router on an already-bound listener until the process exits.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "listening");
    }
    axum::serve(listener, router(state)).await
}
