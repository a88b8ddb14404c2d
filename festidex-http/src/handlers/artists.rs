use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use festidex::error::FestidexError;
use festidex::ArtistFilter;

use super::AppState;
use crate::dto::ArtistPage;

/// `GET /artists` (and `/`): the full listing, optionally narrowed by
/// `creationMin`, `creationMax`, `membersMin`, `membersMax`.
pub async fn list_artists(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<ArtistFilter>,
) -> Result<Json<serde_json::Value>, FestidexError> {
    let artists = filter.apply(&state.snapshot);
    if !filter.is_empty() {
        tracing::debug!(
            "Listing filtered to {} of {} artists",
            artists.len(),
            state.snapshot.len()
        );
    }
    Ok(Json(serde_json::to_value(artists)?))
}

/// `GET /artist/:id`. Non-numeric and out-of-range ids are 404.
pub async fn artist_details(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, FestidexError> {
    let view = festidex::resolve_str(&state.snapshot, &id)?;
    Ok(Json(serde_json::to_value(ArtistPage::from(view))?))
}
