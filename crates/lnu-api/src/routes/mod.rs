//! API route handlers.

mod analysis;
mod generate;
mod health;
mod lexicon;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::types::ApiState;

/// Create the API router with all endpoints, unprefixed.
pub fn create_api_router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health
        .route("/health", get(health::health_handler))
        // Analysis
        .route("/word", get(analysis::word_handler))
        .route("/sentence", get(analysis::sentence_handler))
        // Generation
        .route("/generate", post(generate::generate_handler))
        // Dictionary
        .route("/lookup", get(lexicon::lookup_handler))
        .route("/entries", get(lexicon::entries_handler))
        .with_state(state)
}

/// Full application: the API mounted at `/api` with CORS and request tracing.
pub fn create_app(state: Arc<ApiState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", create_api_router(state))
        // Request tracing (enable with RUST_LOG=tower_http=info or higher)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
}
