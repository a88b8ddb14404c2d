//! # FestiDex
//!
//! An artist catalog built from four parallel datasets published by a remote
//! API: artists, concert locations, concert dates, and the relation between
//! dates and locations. The collections are fetched once, joined by position,
//! and served read-only for the lifetime of the process.
//!
//! The HTTP front-end lives in the companion `festidex-http` crate; this
//! crate is the join-and-search engine it runs on.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use festidex::source::{CatalogConfig, HttpSource};
//! use festidex::{resolve, SearchEngine, Snapshot};
//!
//! # async fn run() -> festidex::Result<()> {
//! let source = HttpSource::new(CatalogConfig::from_env())?;
//! let snapshot = Snapshot::load(&source).await?;
//!
//! let view = resolve(&snapshot, 1)?;
//! println!("{} played {} venues", view.artist.name, view.locations.len());
//!
//! for hit in SearchEngine::new(&snapshot).search("queen") {
//!     println!("{} [{}] -> /artist/{}", hit.name, hit.kind, hit.id);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature flags
//!
//! | Feature | Dependencies | Use case |
//! |---------|-------------|----------|
//! | `axum-support` | axum | [`FestidexError`] implements `IntoResponse` |

pub mod catalog;
pub mod error;
pub mod query;
pub mod source;
pub mod types;

pub use catalog::{resolve, resolve_str, Concert, JoinedView, Snapshot, SnapshotCounts};
pub use error::{FestidexError, Result};
pub use query::{search, ArtistFilter, HitKind, SearchEngine, SearchHit};
pub use source::{CatalogConfig, CatalogSource, HttpSource, StaticSource};
pub use types::*;
