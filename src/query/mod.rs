pub mod filter;
pub mod format;
pub mod search;

pub use filter::ArtistFilter;
pub use format::{format_map_label, format_venue};
pub use search::{search, HitKind, SearchEngine, SearchHit, DEFAULT_SUGGESTION_LIMIT};
