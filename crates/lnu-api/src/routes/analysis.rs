//! Word and sentence analysis endpoints.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use lnu_core::SentenceAnalysis;
use tracing::debug;

use crate::types::{ApiResponse, ApiState, TextQuery, WordResponse};

/// Handler for GET /api/word?q=...
///
/// A blank query yields `null` data rather than an error.
pub async fn word_handler(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<TextQuery>,
) -> Json<ApiResponse<Option<WordResponse>>> {
    let result = state.translator.analyze_word(&query.q);
    debug!(word = %query.q, found = result.is_some(), "word analysis");
    Json(ApiResponse::new(result.map(WordResponse::from)))
}

/// Handler for GET /api/sentence?q=...
pub async fn sentence_handler(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<TextQuery>,
) -> Json<ApiResponse<SentenceAnalysis>> {
    let analysis = state.translator.analyze_sentence(&query.q);
    debug!(tokens = analysis.tokens.len(), "sentence analysis");
    Json(ApiResponse::new(analysis))
}
