use serde::Serialize;

use crate::error::Result;
use crate::source::CatalogSource;
use crate::types::{Artist, DateRecord, LocationRecord, RelationRecord};

/// The four catalog collections, loaded once and never mutated afterwards.
///
/// Auxiliary collections are stored exactly as delivered; they may be shorter
/// or longer than `artists`. Positional lookups go through
/// [`crate::catalog::join`], which tolerates either case.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    artists: Vec<Artist>,
    locations: Vec<LocationRecord>,
    dates: Vec<DateRecord>,
    relations: Vec<RelationRecord>,
}

/// Collection sizes, reported by `/health` and logged after a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SnapshotCounts {
    pub artists: usize,
    pub locations: usize,
    pub dates: usize,
    pub relations: usize,
}

impl Snapshot {
    pub fn new(
        artists: Vec<Artist>,
        locations: Vec<LocationRecord>,
        dates: Vec<DateRecord>,
        relations: Vec<RelationRecord>,
    ) -> Self {
        Self {
            artists,
            locations,
            dates,
            relations,
        }
    }

    /// Fetch artists, locations, dates and relations, in that order.
    ///
    /// The first failing fetch aborts the load; later collections are not
    /// requested and no snapshot is returned.
    pub async fn load<S: CatalogSource>(source: &S) -> Result<Self> {
        let artists = source.fetch_artists().await?;
        let locations = source.fetch_locations().await?;
        let dates = source.fetch_dates().await?;
        let relations = source.fetch_relations().await?;

        let snapshot = Self::new(artists, locations, dates, relations);
        let counts = snapshot.counts();
        tracing::info!(
            artists = counts.artists,
            locations = counts.locations,
            dates = counts.dates,
            relations = counts.relations,
            "Catalog snapshot loaded"
        );
        for (name, len) in [
            ("locations", counts.locations),
            ("dates", counts.dates),
            ("relations", counts.relations),
        ] {
            if len < counts.artists {
                tracing::warn!(
                    "Only {} {} records for {} artists; missing entries join as empty",
                    len,
                    name,
                    counts.artists
                );
            }
        }

        Ok(snapshot)
    }

    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    pub fn len(&self) -> usize {
        self.artists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }

    pub fn counts(&self) -> SnapshotCounts {
        SnapshotCounts {
            artists: self.artists.len(),
            locations: self.locations.len(),
            dates: self.dates.len(),
            relations: self.relations.len(),
        }
    }

    pub fn artist(&self, index: usize) -> Option<&Artist> {
        self.artists.get(index)
    }

    pub fn location(&self, index: usize) -> Option<&LocationRecord> {
        self.locations.get(index)
    }

    pub fn date(&self, index: usize) -> Option<&DateRecord> {
        self.dates.get(index)
    }

    pub fn relation(&self, index: usize) -> Option<&RelationRecord> {
        self.relations.get(index)
    }
}
