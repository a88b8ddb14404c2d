use axum::{extract::State, Json};
use std::sync::Arc;

use super::AppState;

/// Health check endpoint
pub async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let counts = state.snapshot.counts();

    Json(serde_json::json!({
        "status": "ok",
        "artists": counts.artists,
        "collections": counts,
        "build_profile": if cfg!(debug_assertions) { "debug" } else { "release" },
    }))
}
