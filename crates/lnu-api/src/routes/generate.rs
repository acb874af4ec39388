//! Term generation endpoint.

use std::sync::Arc;

use axum::{extract::State, Json};
use lnu_core::GenerationRequest;
use tracing::info;

use crate::types::{ApiResponse, ApiState, GenerateResponse};

/// Handler for POST /api/generate
pub async fn generate_handler(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<GenerationRequest>,
) -> Json<ApiResponse<GenerateResponse>> {
    let candidates = state.translator.generate_term(&request);
    info!(
        concept = %request.concept,
        candidates = candidates.len(),
        "generated candidates"
    );
    Json(ApiResponse::new(GenerateResponse {
        concept: request.concept,
        candidates,
    }))
}
