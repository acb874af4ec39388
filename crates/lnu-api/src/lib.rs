//! JSON HTTP API for L'nui'suti.
//!
//! A thin layer over [`lnu_bridge::Translator`]; every handler is a pure
//! read of the shared language data.
//!
//! ## Endpoints
//!
//! - `GET /api/health` - Status with entry and morpheme counts
//! - `GET /api/word?q=...` - Analyse one word (`null` data for a blank query)
//! - `GET /api/sentence?q=...` - Analyse each token of a sentence
//! - `POST /api/generate` - Candidate words for `{concept, purpose, domain_tags}`
//! - `GET /api/lookup?q=...&input_type=...` - Dictionary lookup (`auto`, `mikmaw`, `english`)
//! - `GET /api/entries` - Headwords in insertion order
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use lnu_api::{create_api_state, create_app};
//! use lnu_bridge::{LanguageData, Translator};
//!
//! let data = LanguageData::seed().unwrap();
//! let state = create_api_state(Translator::new(Arc::new(data)));
//! let app = create_app(state);
//! ```

mod routes;
mod types;

pub use routes::{create_api_router, create_app};
pub use types::{
    ApiResponse, ApiState, ErrorResponse, GenerateResponse, HealthResponse, LookupQuery,
    TextQuery, WordResponse,
};

use lnu_bridge::Translator;
use std::sync::Arc;

/// Create a new API state around a translator.
pub fn create_api_state(translator: Translator) -> Arc<ApiState> {
    Arc::new(ApiState {
        translator: Arc::new(translator),
    })
}
