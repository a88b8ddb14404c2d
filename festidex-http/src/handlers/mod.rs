use axum::http::Uri;
use festidex::{FestidexError, SearchEngine, Snapshot};

pub mod artists;
pub mod health;
pub mod search;

/// Shared by every handler behind an `Arc`. Built once after the snapshot
/// has loaded; never mutated afterwards, so handlers read it without locks.
pub struct AppState {
    pub snapshot: Snapshot,
}

impl AppState {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    pub fn engine(&self) -> SearchEngine<'_> {
        SearchEngine::new(&self.snapshot)
    }
}

/// Fallback for every unrouted path.
pub async fn not_found(uri: Uri) -> FestidexError {
    FestidexError::RouteNotFound(uri.path().to_string())
}

pub use artists::{artist_details, list_artists};
pub use health::health;
pub use search::{api_search, search_page};
