use axum::{routing::get, Router};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::handlers::{
    api_search, artist_details, health, list_artists, not_found, search_page, AppState,
};
use festidex::{CatalogConfig, HttpSource, Snapshot};

/// Everything `serve` needs. The binary fills it from CLI args and their
/// `FESTIDEX_*` env fallbacks.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    /// Static files served under `/assets`; skipped when the directory is missing.
    pub assets_dir: Option<PathBuf>,
    pub catalog: CatalogConfig,
}

/// Routes for a loaded catalog.
pub fn router(state: Arc<AppState>, assets_dir: Option<&Path>) -> Router {
    let app = Router::new()
        .route("/health", get(health))
        .route("/", get(list_artists))
        .route("/artists", get(list_artists))
        .route("/artist/:id", get(artist_details))
        .route("/search", get(search_page))
        .route("/api/search", get(api_search))
        .fallback(not_found)
        .with_state(state);

    let app = match assets_dir {
        Some(dir) if dir.is_dir() => {
            tracing::info!("Serving static assets from {:?}", dir);
            app.nest_service("/assets", ServeDir::new(dir))
        }
        Some(dir) => {
            tracing::warn!("Assets directory not found at {:?}, skipping", dir);
            app
        }
        None => app,
    };

    app.layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive().max_age(std::time::Duration::from_secs(86400)))
}

/// Initialise logging, load the catalog, then serve until Ctrl-C.
///
/// A failed load returns the error before the listener is bound: the server
/// never runs on a partial catalog.
pub async fn serve(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    tracing::info!(
        api_url = %config.catalog.api_url,
        fetch_timeout_secs = config.catalog.fetch_timeout_secs,
        "Loading catalog"
    );
    let source = HttpSource::new(config.catalog.clone())?;
    let snapshot = match Snapshot::load(&source).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            tracing::error!("Catalog load failed, not starting: {}", e);
            return Err(e.into());
        }
    };

    let state = Arc::new(AppState::new(snapshot));
    let app = router(state, config.assets_dir.as_deref());

    tracing::info!("Starting FestiDex server on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Safe to call more than once; later calls keep the first subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
