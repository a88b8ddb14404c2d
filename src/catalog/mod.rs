pub mod join;
pub mod snapshot;

pub use join::{resolve, resolve_str, Concert, JoinedView};
pub use snapshot::{Snapshot, SnapshotCounts};
