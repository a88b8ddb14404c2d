use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use std::sync::Arc;
use std::time::Instant;

use festidex::error::FestidexError;

use super::AppState;
use crate::dto::{SearchPage, SearchParams};

/// `GET /search?q=...`. A blank query sends the visitor to the full listing.
pub async fn search_page(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Response, FestidexError> {
    if params.is_blank() {
        return Ok(Redirect::to("/artists").into_response());
    }

    let start = Instant::now();
    let hits = match params.limit {
        Some(limit) => state.engine().suggest(&params.q, limit),
        None => state.engine().search(&params.q),
    };
    tracing::debug!(
        query = %params.q,
        hits = hits.len(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "search"
    );

    let page = SearchPage {
        query: params.q,
        total: hits.len(),
        hits,
    };
    Ok(Json(serde_json::to_value(page)?).into_response())
}

/// `GET /api/search?q=...&limit=...`: bare JSON array of hits, `[]` for a
/// blank query.
pub async fn api_search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<serde_json::Value>, FestidexError> {
    if params.is_blank() {
        return Ok(Json(serde_json::Value::Array(Vec::new())));
    }

    let hits = match params.limit {
        Some(limit) => state.engine().suggest(&params.q, limit),
        None => state.engine().search(&params.q),
    };
    Ok(Json(serde_json::to_value(hits)?))
}
