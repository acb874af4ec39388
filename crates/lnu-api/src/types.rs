//! API types and DTOs.

use lnu_bridge::Translator;
use lnu_core::{AnalysisResult, AnalysisSource, GenerationCandidate};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Shared application state for the API.
pub struct ApiState {
    /// Read-only translator over the loaded language data.
    pub translator: Arc<Translator>,
}

/// Response wrapper with timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response data.
    pub data: T,
    /// Unix timestamp in milliseconds.
    pub timestamp: u64,
}

impl<T> ApiResponse<T> {
    /// Create a new API response with current timestamp.
    pub fn new(data: T) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        Self { data, timestamp }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Number of lexicon entries.
    pub entries: usize,
    /// Number of known morphemes.
    pub morphemes: usize,
}

/// Query string carrying a single `q` parameter.
#[derive(Debug, Default, Deserialize)]
pub struct TextQuery {
    #[serde(default)]
    pub q: String,
}

/// Query parameters for the lookup endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct LookupQuery {
    #[serde(default)]
    pub q: String,
    /// `auto`, `mikmaw` or `english`; defaults to `auto`.
    #[serde(default)]
    pub input_type: Option<String>,
    /// `SFO`, `LO` or `BOTH`; defaults to `SFO`.
    #[serde(default)]
    pub orth: Option<String>,
}

/// Single-word analysis with its provenance flattened out for clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordResponse {
    pub has_entry: bool,
    pub source: AnalysisSource,
    pub result: AnalysisResult,
}

impl From<AnalysisResult> for WordResponse {
    fn from(result: AnalysisResult) -> Self {
        Self {
            has_entry: result.has_entry(),
            source: result.source(),
            result,
        }
    }
}

/// Candidates proposed for one concept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub concept: String,
    pub candidates: Vec<GenerationCandidate>,
}

/// Error payload for rejected requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code.
    pub code: String,
    /// Error message.
    pub message: String,
}
