//! Dictionary endpoints.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lnu_core::{InputType, Orthography};
use tracing::warn;

use crate::types::{ApiResponse, ApiState, ErrorResponse, LookupQuery};

/// Handler for GET /api/lookup?q=...&input_type=...&orth=...
pub async fn lookup_handler(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<LookupQuery>,
) -> impl IntoResponse {
    let input_type = match parse_param::<InputType>(
        query.input_type.as_deref(),
        "input_type",
        "INVALID_INPUT_TYPE",
    ) {
        Ok(input_type) => input_type,
        Err(response) => return response,
    };
    let orthography =
        match parse_param::<Orthography>(query.orth.as_deref(), "orth", "INVALID_ORTHOGRAPHY") {
            Ok(orthography) => orthography,
            Err(response) => return response,
        };

    let result = state.translator.lookup(&query.q, input_type, orthography);
    (StatusCode::OK, Json(ApiResponse::new(result))).into_response()
}

/// Blank or missing parameters take the default; bad values are a 400.
fn parse_param<T>(raw: Option<&str>, name: &str, code: &str) -> Result<T, Response>
where
    T: std::str::FromStr<Err = String> + Default,
{
    match raw.map(str::trim) {
        None | Some("") => Ok(T::default()),
        Some(value) => value.parse::<T>().map_err(|message| {
            warn!(param = name, value, "rejected lookup");
            (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::new(ErrorResponse {
                    code: code.to_string(),
                    message,
                })),
            )
                .into_response()
        }),
    }
}

/// Handler for GET /api/entries - headwords in insertion order.
pub async fn entries_handler(State(state): State<Arc<ApiState>>) -> Json<ApiResponse<Vec<String>>> {
    let headwords = state
        .translator
        .data()
        .lexicon()
        .headwords()
        .map(str::to_string)
        .collect();
    Json(ApiResponse::new(headwords))
}
